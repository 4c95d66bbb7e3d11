use crate::args::InputArgs;
use crate::handlers::HandlerContext;
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;
use sideload_document::IncludedIndex;

pub fn handle(ctx: &HandlerContext, input: &InputArgs) -> Result<()> {
    let document = input::load(input)?;
    let envelope = &document.envelope;
    let index = IncludedIndex::from_envelope(envelope);

    tracing::info!(
        kind = envelope.kind(),
        primary = envelope.primary().len(),
        included = index.len(),
        "inspecting document"
    );

    let view_model = presenters::present_document_summary(&document.source, envelope, &index);
    ctx.render(view_model)
}
