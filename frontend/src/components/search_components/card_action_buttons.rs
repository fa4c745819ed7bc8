//! University card action buttons.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::data_definitions::card_export::export_card_script;

/// Rasterizes the card with `element_id` and downloads it as `file_name`.
#[component]
pub fn DownloadCardImageButton(element_id: ReadSignal<String>, file_name: ReadSignal<String>) -> Element {
    let do_export = use_callback(move |_: ()| {
        let element_id = element_id.read().clone();
        let file_name = file_name.read().clone();
        spawn(async move {
            let script = export_card_script(&element_id, &file_name);
            match document::eval(&script).join::<bool>().await {
                Ok(true) => tracing::info!("Card {} exported as {}", element_id, file_name),
                Ok(false) => tracing::error!("Card {} not found, nothing exported", element_id),
                Err(e) => tracing::error!("Error exporting card {}: {:#?}", element_id, e),
            }
        });
    });
    rsx! {
        button {
            class: "university-search-hover-shadow",
            style: "
                margin-top: 12px;
                display: flex;
                align-items: center;
                gap: 6px;
                cursor: pointer;
                border: none;
                border-radius: 4px;
                background: rgb(59, 130, 246);
                color: white;
                font-size: 16px;
                padding: 8px;
            ",
            onclick: move |_| {
                do_export.call(());
            },
            Icon {
                icon: MdFileDownload,
                style: "width: 20px; height: 20px;"
            }
            "Download as Image"
        }
    }
}
