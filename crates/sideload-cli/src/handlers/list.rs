use crate::args::{FieldsArgs, InputArgs};
use crate::handlers::HandlerContext;
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;
use sideload_document::{SparseFieldset, build_rows, sparse_output};

pub fn handle(
    ctx: &HandlerContext,
    input: &InputArgs,
    fields: &FieldsArgs,
    limit: Option<usize>,
    width: Option<usize>,
) -> Result<()> {
    let fieldset = SparseFieldset::parse(&fields.fields)?;
    let document = input::load(input)?;
    let envelope = &document.envelope;

    // A restricted response is passed through before any row is built.
    if let Some(bags) = sparse_output(envelope, &fieldset) {
        tracing::debug!("sparse fieldset requested, passing decoded bags through");
        return ctx.render(presenters::present_raw_bags(bags));
    }

    let resolver = ctx.resolver(envelope);
    let rows = build_rows(envelope, &resolver);
    tracing::debug!(rows = rows.len(), included = resolver.index().len(), "built rows");

    let width = width.unwrap_or(ctx.config.truncate_width);
    let view_model = presenters::present_resource_list(&document.source, rows, limit, width);
    ctx.render(view_model)
}
