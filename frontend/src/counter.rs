//! Count the visitor number up from zero after the page settles.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use site_glue_shared::{CountUp, CounterText, SiteConfig};
use web_sys::{Document, Element};

use crate::{config::VISITOR_COUNT_ID, console};

pub(crate) fn install(document: &Document, config: &SiteConfig) {
    let Some(element) = document.get_element_by_id(VISITOR_COUNT_ID) else {
        return;
    };
    let raw = element.text_content().unwrap_or_default();
    let text = match CounterText::parse(&raw) {
        Ok(text) => Rc::new(text),
        Err(err) => {
            console::debug(&format!("counter: {err}"));
            return;
        }
    };

    let ticks = CountUp::new(text.target(), config.counter_steps);
    schedule(config.counter_start_delay_ms, config.counter_tick_ms, element, text, ticks);
}

fn schedule(delay_ms: u32, tick_ms: u32, element: Element, text: Rc<CounterText>, mut ticks: CountUp) {
    Timeout::new(delay_ms, move || {
        if let Some(value) = ticks.next() {
            element.set_text_content(Some(&text.render(value)));
            schedule(tick_ms, tick_ms, element, text, ticks);
        }
    })
    .forget();
}
