//! Declarations artifact.

use super::escape::c_string_literal;
use super::{RenderConfig, GENERATED_BANNER};
use crate::schema::CityRecord;

/// Render the declarations file: struct, table, count, prototypes.
pub fn render_header(records: &[CityRecord], config: &RenderConfig) -> String {
    let mut out = String::new();

    out.push_str("/*\n");
    out.push_str(" * City coordinate table.\n");
    out.push_str(&format!(" * {}\n", GENERATED_BANNER));
    out.push_str(" */\n");
    out.push_str("#pragma once\n\n");
    out.push_str("#include <cstddef>\n\n");

    out.push_str(&format!("struct {} {{\n", config.struct_name));
    out.push_str("    const char* id;       // city identifier\n");
    out.push_str("    const char* admin;    // administrative region\n");
    out.push_str("    const char* city;     // city name\n");
    out.push_str("    const char* pinyin;   // phonetic spelling\n");
    out.push_str("    double lat;           // latitude\n");
    out.push_str("    double lon;           // longitude\n");
    out.push_str("};\n\n");

    out.push_str(&format!(
        "static const {} {}[] = {{\n",
        config.struct_name, config.table_name
    ));
    if records.is_empty() {
        // C++ has no zero-length arrays; the count below keeps lookups off it
        out.push_str("    {\"\", \"\", \"\", \"\", 0.0, 0.0},\n");
    }
    for record in records {
        out.push_str(&render_entry(record, config.precision));
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "static const size_t {} = {};\n\n",
        config.count_name,
        records.len()
    ));

    out.push_str("// Lookup functions\n");
    out.push_str(&format!(
        "bool {}(const char* city_name, double& lat, double& lon);\n",
        config.name_lookup
    ));
    out.push_str(&format!(
        "bool {}(const char* admin_name, double& lat, double& lon);\n",
        config.admin_lookup
    ));

    out
}

fn render_entry(record: &CityRecord, precision: usize) -> String {
    format!(
        "    {{{}, {}, {}, {}, {:.prec$}, {:.prec$}}},\n",
        c_string_literal(&record.id),
        c_string_literal(&record.admin),
        c_string_literal(&record.city),
        c_string_literal(&record.pinyin),
        record.lat,
        record.lon,
        prec = precision
    )
}
