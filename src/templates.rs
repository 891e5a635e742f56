use handlebars::Handlebars;
use std::sync::Arc;

use crate::error::MonitorResult;

pub type Hbs = Arc<Handlebars<'static>>;

pub const REPORT: &str = "report";
pub const SUMMARY: &str = "summary";

pub fn build_handlebars() -> MonitorResult<Hbs> {
    let mut hb = Handlebars::new();

    // Plain-text output: URLs and "&" in retailer names must survive untouched.
    hb.register_escape_fn(handlebars::no_escape);

    hb.register_template_string(REPORT, include_str!("../templates/report.hbs"))?;
    hb.register_template_string(SUMMARY, include_str!("../templates/summary.hbs"))?;

    Ok(Arc::new(hb))
}
