//! Tab titles, one per registered tab key

/// Title of the tab for `key`; empty for unknown keys
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_fabric" => "Fabrics",
        "a005_defect" => "Defects",
        "a006_wash_recipe" => "Wash recipe",
        "d400_defect_analytics" => "Defect analytics",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_has_no_label() {
        assert_eq!(tab_label_for_key("a001_fabric"), "Fabrics");
        assert_eq!(tab_label_for_key("a999_unknown"), "");
    }
}
