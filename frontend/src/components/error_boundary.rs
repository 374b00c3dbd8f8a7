//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = format!("{err:#?}");
                dioxus::logger::tracing::error!("render error in boundary {}: {}", boundary_name, error_txt);
                rsx! {
                    div {
                        id: "x-error-boundary",
                        style: "
                            max-width: 896px;
                            margin: 24px auto;
                            padding: 16px;
                            border: 1px solid #FCA5A5;
                            border-radius: 8px;
                            background-color: #FEF2F2;
                            color: #991B1B;
                        ",
                        h1 {
                            style: "font-size: 20px; font-weight: 600; margin-bottom: 8px;",
                            "Something went wrong"
                        }
                        p {
                            style: "font-size: 14px; margin-bottom: 8px;",
                            "Boundary: {boundary_name}"
                        }
                        pre {
                            style: "font-size: 12px; text-wrap: auto; color: #7F1D1D;",
                            "{error_txt}"
                        }
                        button {
                            style: "
                                margin-top: 8px;
                                padding: 6px 12px;
                                border: 1px solid #DC2626;
                                border-radius: 8px;
                                background: white;
                                color: #DC2626;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            children
        }
    }
}
