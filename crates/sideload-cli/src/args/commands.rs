use super::common::{FieldsArgs, InputArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a document: shape, counts and resource types
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render every primary resource as a table row
    List {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        fields: FieldsArgs,

        /// Show at most N rows
        #[arg(long)]
        limit: Option<usize>,

        /// Maximum cell width (defaults to the config file's `truncate_width`)
        #[arg(long)]
        width: Option<usize>,
    },

    /// Show one primary resource in detail
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Resource to show, as `TYPE|ID` or a bare `ID`
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: FieldsArgs,
    },

    /// Resolve one relationship of a primary resource against `included`
    Resolve {
        #[command(flatten)]
        input: InputArgs,

        /// Relationship name, e.g. `owner`
        #[arg(long, short = 'r')]
        relationship: String,

        /// Resource to resolve on, as `TYPE|ID` or a bare `ID`
        #[arg(long)]
        id: Option<String>,
    },
}
