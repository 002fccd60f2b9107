//! Lookup function artifact.

use super::{RenderConfig, GENERATED_BANNER};

/// Render the implementation file holding both lookup functions.
///
/// Each function scans the table in order and returns the first entry
/// where either string contains the other.
pub fn render_implementation(header_file_name: &str, config: &RenderConfig) -> String {
    let mut out = String::new();

    out.push_str("/*\n");
    out.push_str(" * City coordinate lookup functions.\n");
    out.push_str(&format!(" * {}\n", GENERATED_BANNER));
    out.push_str(" */\n");
    out.push_str(&format!("#include \"{}\"\n", header_file_name));
    out.push_str("#include <cstring>\n\n");

    out.push_str(&render_lookup(&config.name_lookup, "city_name", "city", config));
    out.push('\n');
    out.push_str(&render_lookup(&config.admin_lookup, "admin_name", "admin", config));

    out
}

fn render_lookup(function: &str, param: &str, field: &str, config: &RenderConfig) -> String {
    let table = &config.table_name;
    format!(
        "bool {function}(const char* {param}, double& lat, double& lon) {{\n\
         \x20   for (size_t i = 0; i < {count}; i++) {{\n\
         \x20       if (strstr({table}[i].{field}, {param}) != nullptr ||\n\
         \x20           strstr({param}, {table}[i].{field}) != nullptr) {{\n\
         \x20           lat = {table}[i].lat;\n\
         \x20           lon = {table}[i].lon;\n\
         \x20           return true;\n\
         \x20       }}\n\
         \x20   }}\n\
         \x20   return false;\n\
         }}\n",
        count = config.count_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_header_base_name() {
        let source = render_implementation("city_data.h", &RenderConfig::default());
        assert!(source.contains("#include \"city_data.h\"\n#include <cstring>\n"));
    }

    #[test]
    fn test_name_lookup_body() {
        let source = render_implementation("city_data.h", &RenderConfig::default());
        let expected = "bool FindCityByName(const char* city_name, double& lat, double& lon) {\n    \
                        for (size_t i = 0; i < city_count; i++) {\n        \
                        if (strstr(city_coordinates[i].city, city_name) != nullptr ||\n            \
                        strstr(city_name, city_coordinates[i].city) != nullptr) {\n            \
                        lat = city_coordinates[i].lat;\n            \
                        lon = city_coordinates[i].lon;\n            \
                        return true;\n        \
                        }\n    \
                        }\n    \
                        return false;\n\
                        }\n";
        assert!(source.contains(expected), "{}", source);
    }

    #[test]
    fn test_admin_lookup_uses_admin_field() {
        let source = render_implementation("city_data.h", &RenderConfig::default());
        assert!(source.contains("bool FindCityByAdmin(const char* admin_name, double& lat, double& lon) {"));
        assert!(source.contains("strstr(city_coordinates[i].admin, admin_name) != nullptr"));
        assert!(source.contains("strstr(admin_name, city_coordinates[i].admin) != nullptr"));
    }
}
