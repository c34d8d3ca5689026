//! Document shell and the sections every page carries.

use super::components::root_prefix;
use super::escape::{escape, script_json};
use crate::presentation::presenters::site::{COMPARE_PAGE, INDEX_PAGE, agent_page_path};
use crate::presentation::view_models::{SiteViewModel, TestimonialViewModel};
use serde_json::json;

pub const STYLESHEET: &str = "assets/site.css";

/// Agents listed in a page's JSON-LD block, as `(id, name)`.
pub type ListedAgent<'a> = (&'a str, &'a str);

pub struct Page<'a> {
    pub site: &'a SiteViewModel,
    pub path: &'a str,
    pub title: String,
    pub listed: Vec<ListedAgent<'a>>,
}

impl<'a> Page<'a> {
    pub fn root(&self) -> String {
        root_prefix(self.path)
    }

    pub fn render(&self, main: &str) -> String {
        let root = self.root();
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!(
            "<html lang=\"en\" data-theme=\"{}\">\n",
            escape(&self.site.theme)
        ));
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("  <title>{}</title>\n", escape(&self.title)));
        html.push_str(&format!("  <link rel=\"stylesheet\" href=\"{}{}\">\n", root, STYLESHEET));
        html.push_str(&self.json_ld(&root));
        html.push_str("</head>\n");
        html.push_str("<body>\n");

        html.push_str(&nav(&root));
        html.push_str("<main>\n");
        html.push_str(main);
        html.push_str("</main>\n");

        html.push_str(&testimonials(&self.site.testimonials));
        html.push_str(&pricing(self.site));
        html.push_str(&newsletter());
        html.push_str(&submit_form(self.site));
        html.push_str(&footer(self.site.year));

        html.push_str("</body>\n");
        html.push_str("</html>\n");
        html
    }

    fn json_ld(&self, root: &str) -> String {
        let elements: Vec<_> = self
            .listed
            .iter()
            .enumerate()
            .map(|(i, (id, name))| {
                json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "name": name,
                    "url": format!("{}{}", root, agent_page_path(id)),
                })
            })
            .collect();
        let data = json!({
            "@context": "https://schema.org",
            "@type": "ItemList",
            "numberOfItems": elements.len(),
            "itemListElement": elements,
        });
        format!(
            "  <script type=\"application/ld+json\">{}</script>\n",
            script_json(&data.to_string())
        )
    }
}

fn nav(root: &str) -> String {
    format!(
        "<header class=\"navbar\">\n<a class=\"logo\" href=\"{root}{INDEX_PAGE}\">🤖 AgentStack</a>\n<nav>\n<a href=\"{root}{INDEX_PAGE}#directory\">Directory</a>\n<a href=\"{root}{COMPARE_PAGE}\">Compare</a>\n<a href=\"#pricing\">Pricing</a>\n<a class=\"btn-primary\" href=\"#submit\">Submit Agent</a>\n</nav>\n</header>\n"
    )
}

fn testimonials(items: &[TestimonialViewModel]) -> String {
    let mut html = String::from("<section class=\"testimonials\">\n<h2>Loved by builders</h2>\n<div class=\"testimonial-track\">\n");
    for t in items {
        html.push_str(&format!(
            "<figure class=\"testimonial\"><div class=\"stars\">{}</div><blockquote>{}</blockquote><figcaption><span class=\"avatar\" style=\"background:{}\">{}</span><strong>{}</strong> <span>{}</span></figcaption></figure>\n",
            "★".repeat(t.stars as usize),
            escape(&t.text),
            escape(&t.color),
            escape(&t.initial.to_string()),
            escape(&t.name),
            escape(&t.role)
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn pricing(site: &SiteViewModel) -> String {
    let mut html = String::from("<section class=\"pricing\" id=\"pricing\">\n<h2>List your agent</h2>\n<div class=\"pricing-grid\">\n");
    for tier in &site.tiers {
        html.push_str(&format!(
            "<div class=\"pricing-card tier-{}\"><h3>{}</h3><p class=\"price\">{}</p><ul>",
            escape(&tier.id),
            escape(&tier.label),
            escape(&tier.price)
        ));
        for perk in &tier.perks {
            html.push_str(&format!("<li>{}</li>", escape(perk)));
        }
        html.push_str("</ul><a class=\"btn-primary\" href=\"#submit\">Get started</a></div>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn newsletter() -> String {
    "<section class=\"newsletter\">\n<h2>Get the weekly agent digest</h2>\n<form class=\"newsletter-form\" action=\"#\" method=\"post\">\n<input type=\"email\" name=\"email\" placeholder=\"you@example.com\" required>\n<button type=\"submit\">Subscribe</button>\n</form>\n</section>\n".to_string()
}

fn submit_form(site: &SiteViewModel) -> String {
    let mut html = String::from("<section class=\"submit\" id=\"submit\">\n<h2>Submit your agent</h2>\n<form class=\"submit-form\" action=\"#\" method=\"post\">\n");
    for (name, label, kind) in [
        ("name", "Agent name", "text"),
        ("company", "Company", "text"),
        ("tagline", "Tagline", "text"),
    ] {
        html.push_str(&format!(
            "<label>{label}<input type=\"{kind}\" name=\"{name}\" required></label>\n"
        ));
    }
    html.push_str("<label>Description<textarea name=\"description\" required></textarea></label>\n");
    html.push_str("<label>Category<select name=\"category\" required>\n");
    for option in &site.submit_categories {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape(&option.value),
            escape(&option.label)
        ));
    }
    html.push_str("</select></label>\n");
    for (name, label, kind) in [
        ("pricing", "Pricing", "text"),
        ("website", "Website", "url"),
        ("email", "Contact email", "email"),
    ] {
        html.push_str(&format!(
            "<label>{label}<input type=\"{kind}\" name=\"{name}\" required></label>\n"
        ));
    }
    html.push_str("<label>Listing<select name=\"tier\">\n");
    for tier in &site.tiers {
        html.push_str(&format!(
            "<option value=\"{}\">{} ({})</option>\n",
            escape(&tier.id),
            escape(&tier.label),
            escape(&tier.price)
        ));
    }
    html.push_str("</select></label>\n<button type=\"submit\">Submit Agent</button>\n</form>\n</section>\n");
    html
}

fn footer(year: i32) -> String {
    format!(
        "<footer class=\"footer\"><p>© {} AgentStack. All rights reserved.</p></footer>\n",
        year
    )
}
