use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Response body to read; `-` reads stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: PathBuf,
}

impl InputArgs {
    pub fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct FieldsArgs {
    /// Sparse fieldset, `TYPE=a,b` or `a,b` for the primary type (repeatable)
    #[arg(long = "fields", value_name = "SPEC")]
    pub fields: Vec<String>,
}
