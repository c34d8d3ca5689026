use super::components::{card_grid, category_tiles, compare_table, detail, directory, hero, toolbar};
use super::escape::escape;
use super::layout::Page;
use crate::presentation::presenters::site::COMPARE_PAGE;
use crate::presentation::view_models::{AgentDetailViewModel, DirectoryPageViewModel, SiteViewModel};

fn listed(page: &DirectoryPageViewModel) -> Vec<(&str, &str)> {
    page.directory
        .agents
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect()
}

pub fn index(site: &SiteViewModel) -> String {
    let page = Page {
        site,
        path: &site.index.path,
        title: "AgentStack | Discover the best AI agents".to_string(),
        listed: listed(&site.index),
    };
    let root = page.root();

    let mut main = hero(&site.hero);
    if !site.featured.is_empty() {
        main.push_str("<section class=\"featured\">\n<h2>Featured agents</h2>\n");
        main.push_str(&card_grid(&site.featured, &root));
        main.push_str("</section>\n");
    }
    main.push_str(&category_tiles(&site.categories, &root));
    main.push_str(&toolbar(&site.filters, &site.sorts, &site.index.directory, &root));
    main.push_str(&directory(&site.index.directory, &root));
    page.render(&main)
}

pub fn directory_page(site: &SiteViewModel, dir: &DirectoryPageViewModel) -> String {
    let page = Page {
        site,
        path: &dir.path,
        title: format!(
            "{} · {} | AgentStack",
            dir.directory.filter_label, dir.directory.sort_label
        ),
        listed: listed(dir),
    };
    let root = page.root();

    let mut main = format!("<h1 class=\"page-title\">{}</h1>\n", escape(&dir.directory.filter_label));
    main.push_str(&toolbar(&site.filters, &site.sorts, &dir.directory, &root));
    main.push_str(&directory(&dir.directory, &root));
    page.render(&main)
}

pub fn agent_page(site: &SiteViewModel, path: &str, agent: &AgentDetailViewModel) -> String {
    let page = Page {
        site,
        path,
        title: format!("{} | AgentStack", agent.card.name),
        listed: vec![(agent.card.id.as_str(), agent.card.name.as_str())],
    };
    let root = page.root();
    page.render(&detail(agent, &root))
}

/// `None` when the site has no comparison.
pub fn compare_page(site: &SiteViewModel) -> Option<String> {
    let compare = site.compare.as_ref()?;
    let page = Page {
        site,
        path: COMPARE_PAGE,
        title: "Compare agents | AgentStack".to_string(),
        listed: compare
            .columns
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect(),
    };
    let root = page.root();
    let mut main = String::from("<h1 class=\"page-title\">Compare agents</h1>\n");
    main.push_str(&compare_table(compare, &root));
    Some(page.render(&main))
}
