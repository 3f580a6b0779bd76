use yew::prelude::*;

use crate::charts::theme::ThemePreset;
use crate::components::charts::ChartsSection;
use crate::components::code_block::CodeBlock;
use crate::components::reveal::Reveal;

const WEBHOOK_SNIPPET: &str = r#"
POST /hooks/intake
{
  "source": "crm",
  "event": "lead.created",
  "route_to": ["offer-draft", "crm-sync"]
}
"#;

#[derive(Properties, PartialEq)]
pub struct PortfolioPageProps {
    #[prop_or_default]
    pub preset: ThemePreset,
}

/// The portfolio page: hero, service highlights, the lazy chart section
/// and an integration snippet. The theme preset selects which of the two
/// page variants' palettes the charts use.
#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioPageProps) -> Html {
    html! {
        <main class="portfolio">
            <Reveal class="hero">
                <h1>{"AI automation for everyday operations"}</h1>
                <p class="lead">
                    {"Offer preparation, customer support and back-office work, \
                      automated end to end with measurable results."}
                </p>
            </Reveal>

            <Reveal class="services">
                <h2>{"What gets automated"}</h2>
                <ul class="service-grid">
                    <li>{"Offer and proposal drafting"}</li>
                    <li>{"Customer support triage"}</li>
                    <li>{"Document analysis and extraction"}</li>
                    <li>{"Reporting and reconciliation"}</li>
                </ul>
            </Reveal>

            <Reveal class="metrics">
                <h2>{"Results in numbers"}</h2>
                <ChartsSection preset={props.preset} />
            </Reveal>

            <Reveal class="integration">
                <h2>{"How systems plug in"}</h2>
                <CodeBlock
                    code={WEBHOOK_SNIPPET.to_string()}
                    caption={"A single intake webhook fans events out to the automation pipelines."}
                />
            </Reveal>
        </main>
    }
}
