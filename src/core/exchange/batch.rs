use crate::domain::catalog::Macro;

/// Ordered commands sent within one exchange, each exactly once
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandBatch {
    commands: Vec<String>,
}

impl CommandBatch {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Free-text input is always a single command
    pub fn single(command: &str) -> Self {
        Self {
            commands: vec![command.trim().to_string()],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<&Macro> for CommandBatch {
    fn from(macro_def: &Macro) -> Self {
        Self::new(macro_def.commands.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, SHOW_RUN_MACRO};

    #[test]
    fn test_single_trims() {
        let batch = CommandBatch::single("  show arp \n");
        assert_eq!(batch.iter().collect::<Vec<_>>(), vec!["show arp"]);
    }

    #[test]
    fn test_batch_from_macro_keeps_order() {
        let catalog = Catalog::builtin();
        let batch = CommandBatch::from(catalog.find_macro(SHOW_RUN_MACRO).unwrap());
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.iter().collect::<Vec<_>>(), vec!["term len 0", "show run"]);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_macro_without_commands_is_empty_batch() {
        let macro_def = Macro::from(crate::domain::config::MacroConfig {
            name: "Nothing".to_string(),
            description: String::new(),
            commands: Vec::new(),
            autosave: false,
        });

        let batch = CommandBatch::from(&macro_def);
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert!(CommandBatch::default().is_empty());
    }
}
