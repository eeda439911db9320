//! Reusable page fragments.

use std::collections::BTreeMap;

use katacore_core::accordion::Accordion;
use katacore_core::products::Product;

use crate::html::escape;

const CHEVRON_PATH: &str = "M19 9l-7 7-7-7";

/// Render an accordion with the state carried by the request query.
///
/// Each header is a link to the same page with that item flipped; the
/// body of an item is only emitted while it is open.
#[must_use]
pub fn accordion(acc: &Accordion, path: &str, query: &BTreeMap<String, String>) -> String {
    let state = acc.state_from(query);
    let mut html = String::with_capacity(512 * acc.items.len());

    html.push_str("<div class=\"accordion\" id=\"");
    html.push_str(&escape(acc.id));
    html.push_str("\">");

    for (index, item) in acc.items.iter().enumerate() {
        let open = state.is_open(index);
        html.push_str("<div class=\"accordion-item\"><a class=\"accordion-header\" href=\"");
        html.push_str(&escape(&acc.toggle_href(path, query, index)));
        html.push_str("\" aria-expanded=\"");
        html.push_str(if open { "true" } else { "false" });
        html.push_str("\"><span>");
        html.push_str(&escape(item.title));
        html.push_str("</span><svg class=\"chevron");
        if open {
            html.push_str(" rotated");
        }
        html.push_str("\" fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"");
        html.push_str(CHEVRON_PATH);
        html.push_str("\"/></svg></a>");
        if open {
            html.push_str("<div class=\"accordion-body\">");
            html.push_str(item.body);
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// Render a grid of products.
#[must_use]
pub fn product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "<p class=\"empty\">Chưa có sản phẩm.</p>".to_owned();
    }

    let mut html = String::from("<ul class=\"product-list\">");
    for product in products {
        html.push_str("<li class=\"card product\" data-id=\"");
        html.push_str(&product.id.to_string());
        html.push_str("\"><img src=\"");
        html.push_str(&escape(product.image));
        html.push_str("\" alt=\"");
        html.push_str(&escape(product.name));
        html.push_str("\"/><h3>");
        html.push_str(&escape(product.name));
        html.push_str("</h3><p class=\"price\">");
        html.push_str(&escape(&product.display_price()));
        html.push_str("</p></li>");
    }
    html.push_str("</ul>");
    html
}

/// A titled card with an image and a short description.
#[must_use]
pub fn tool_card(title: &str, description: &str, image_url: &str) -> String {
    format!(
        "<div class=\"card tool-card\"><img src=\"{}\" alt=\"{}\" onerror=\"this.onerror=null;this.src='https://placehold.co/300x200/E0E0E0/666666?text=Image+Error'\"/><div class=\"card-body\"><h3>{}</h3><p>{}</p></div></div>",
        escape(image_url),
        escape(title),
        escape(title),
        escape(description),
    )
}

/// An icon bubble next to a title and description.
#[must_use]
pub fn feature_card(icon: &str, title: &str, description: &str) -> String {
    format!(
        "<div class=\"card feature-card\"><div class=\"feature-icon\" aria-hidden=\"true\">{}</div><div><h2>{}</h2><p>{}</p></div></div>",
        escape(icon),
        escape(title),
        escape(description),
    )
}
