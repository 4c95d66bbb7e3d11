use crate::args::InputArgs;
use crate::handlers::{HandlerContext, select_resource};
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(
    ctx: &HandlerContext,
    input: &InputArgs,
    relationship: &str,
    id: Option<&str>,
) -> Result<()> {
    let document = input::load(input)?;
    let envelope = &document.envelope;
    let resource = select_resource(envelope, id)?;
    let resolver = ctx.resolver(envelope);

    tracing::debug!(
        resource = %resource.identifier(),
        relationship,
        "resolving relationship"
    );

    let view_model = presenters::present_relationship_resolution(
        &document.source,
        resource,
        relationship,
        &resolver,
    );
    ctx.render(view_model)
}
