//! Positional message templates.

use serde::{Deserialize, Serialize};

/// A message with positional `&1`, `&2`, ... placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        MessageTemplate(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes arguments into `&1`, `&2`, ... in index order.
    ///
    /// Each placeholder is replaced at its first occurrence only; extra
    /// placeholders stay in the text.
    pub fn render(&self, args: &[String]) -> String {
        let mut message = self.0.clone();
        for (index, arg) in args.iter().enumerate() {
            let placeholder = format!("&{}", index + 1);
            message = message.replacen(&placeholder, arg, 1);
        }
        message
    }
}

impl From<&str> for MessageTemplate {
    fn from(template: &str) -> Self {
        MessageTemplate::new(template)
    }
}

impl From<String> for MessageTemplate {
    fn from(template: String) -> Self {
        MessageTemplate(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_in_index_order() {
        let template = MessageTemplate::new("between &1 and &2 only");
        let rendered = template.render(&["2".to_string(), "6".to_string()]);
        assert_eq!(rendered, "between 2 and 6 only");
    }

    #[test]
    fn test_replaces_only_the_first_occurrence() {
        let template = MessageTemplate::new("&1 and again &1");
        let rendered = template.render(&["x".to_string()]);
        assert_eq!(rendered, "x and again &1");
    }

    #[test]
    fn test_missing_arguments_leave_placeholders() {
        let template = MessageTemplate::new("min. &1");
        assert_eq!(template.render(&[]), "min. &1");
    }
}
