use crate::args::{FieldsArgs, InputArgs};
use crate::handlers::{HandlerContext, select_resource};
use crate::input;
use crate::presentation::presenters;
use anyhow::Result;
use sideload_document::{SparseFieldset, raw_bag};

pub fn handle(
    ctx: &HandlerContext,
    input: &InputArgs,
    id: Option<&str>,
    fields: &FieldsArgs,
) -> Result<()> {
    let fieldset = SparseFieldset::parse(&fields.fields)?;
    let document = input::load(input)?;
    let envelope = &document.envelope;
    let resource = select_resource(envelope, id)?;

    if fieldset.is_requested() {
        return ctx.render(presenters::present_raw_bags(raw_bag(resource)));
    }

    let resolver = ctx.resolver(envelope);
    let view_model = presenters::present_resource_detail(resource, &resolver);
    ctx.render(view_model)
}
