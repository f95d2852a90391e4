//! Category display formatting

use crate::models::Category;

/// Format categories as an ID/name table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>6}  {}\n", "ID", "Category"));
    output.push_str(&format!("{:->6}  {:-<20}\n", "", ""));

    for category in categories {
        output.push_str(&format!("{:>6}  {}\n", category.id, category.name));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_category_list() {
        let output = format_category_list(&[Category::new(CategoryId::server(3), "Rent")]);
        assert!(output.contains("     3  Rent\n"));
        assert_eq!(format_category_list(&[]), "No categories found.");
    }
}
