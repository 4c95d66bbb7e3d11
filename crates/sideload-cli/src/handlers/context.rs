use crate::args::OutputFormat;
use crate::config::Config;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};
use serde::Serialize;
use sideload_document::{DisplayPreference, Resolver};
use sideload_types::{Envelope, Resource, ResourceIdentifier};
use std::fmt::Display;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
}

impl HandlerContext {
    /// `--format` wins over the config file
    pub fn new(format: Option<OutputFormat>, config: Config) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            config,
        }
    }

    pub fn display_preference(&self) -> DisplayPreference {
        self.config.display_preference()
    }

    pub fn resolver<'a>(&self, envelope: &'a Envelope) -> Resolver<'a> {
        Resolver::for_envelope(envelope, self.display_preference())
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let renderer = ConsoleRenderer::new(self.format.is_json());
        renderer.render(view_model)
    }
}

/// Pick the primary resource a command operates on
///
/// `selector` is `TYPE|ID` or a bare id. Without one, the document must
/// have exactly one primary resource.
pub fn select_resource<'a>(envelope: &'a Envelope, selector: Option<&str>) -> Result<&'a Resource> {
    match selector.map(str::trim) {
        Some(selector) if selector.contains('|') => {
            let identifier = ResourceIdentifier::parse_key(selector)?;
            match envelope.find_primary(Some(identifier.resource_type()), identifier.id()) {
                Some(resource) => Ok(resource),
                None => bail!("No primary resource {} in the document", identifier),
            }
        }
        Some(id) => match envelope.find_primary(None, id) {
            Some(resource) => Ok(resource),
            None => bail!("No primary resource with id '{}' in the document", id),
        },
        None => match envelope.primary() {
            [resource] => Ok(resource),
            [] => bail!("Document has no primary resources"),
            [first, ..] => bail!(
                "Document has {} primary resources; pick one with --id (e.g. --id '{}')",
                envelope.primary().len(),
                first.identifier().key()
            ),
        },
    }
}
