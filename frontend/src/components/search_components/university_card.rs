//! Card showing one university record.

use common::university::UniversityRecord;
use dioxus::prelude::*;

use crate::components::search_components::card_action_buttons::DownloadCardImageButton;

#[component]
pub fn UniversityCard(university: ReadSignal<UniversityRecord>, element_id: ReadSignal<String>) -> Element {
    let UniversityRecord {
        name,
        country,
        alpha_two_code,
        state_province,
        ..
    } = university.read().clone();
    let domains = university.read().domains_display();
    let primary_web_page = university.read().primary_web_page().map(|s| s.to_string());
    let file_name = university.read().export_file_name();

    rsx! {
        div {
            id: "{element_id}",
            style: "
                display: flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 6px;
                background: white;
                border: 1px solid #AAAAAA;
                border-radius: 8px;
                box-shadow: 0 2px 6px 0 rgba(0, 0, 0, 0.15);
                padding: 16px;
                box-sizing: border-box;
                overflow-wrap: anywhere;
            ",
            h3 {
                style: "font-size: 20px; line-height: 28px; font-weight: 700; margin: 0px;",
                "{name}"
            }
            CardField { label: "Alpha Two Code", value: alpha_two_code }
            CardField { label: "Country", value: country }
            CardField { label: "State/Province", value: state_province.unwrap_or_default() }
            CardField { label: "Domains", value: domains }
            if let Some(web_page) = primary_web_page {
                a {
                    style: "color: rgb(59, 130, 246); text-decoration: underline;",
                    href: "{web_page}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{web_page}"
                }
            }
            DownloadCardImageButton { element_id, file_name }
        }
    }
}

#[component]
fn CardField(label: &'static str, value: String) -> Element {
    rsx! {
        p {
            style: "margin: 0px; font-size: 16px; line-height: 23px;",
            strong { "{label}: " }
            "{value}"
        }
    }
}
