pub mod cmd {
    pub const LIST: &str = "agentstack list";
    pub const LIST_OPEN_SOURCE: &str = "agentstack list --filter open-source";
    pub const SHOW: &str = "agentstack show <ID>";
    pub const COMPARE: &str = "agentstack compare <ID> <ID>...";
    pub const CATEGORIES: &str = "agentstack categories";
    pub const FEATURED: &str = "agentstack featured";
    pub const BROWSE: &str = "agentstack browse";
    pub const SITE_BUILD: &str = "agentstack site build --out <DIR>";
    pub const THEME_TOGGLE: &str = "agentstack theme toggle";
}

pub mod fmt {
    pub fn show(id: &str) -> String {
        format!("agentstack show {}", id)
    }

    pub fn list_category(category: &str) -> String {
        format!("agentstack list --filter {}", category)
    }

    pub fn compare(ids: &[String]) -> String {
        format!("agentstack compare {}", ids.join(" "))
    }
}
