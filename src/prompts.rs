pub const SYSTEM: &str = include_str!("../data/prompts/system.txt");
pub const ARTICLE_USER: &str = include_str!("../data/prompts/article_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// User prompt asking for one article about `topic`.
pub fn article_prompt(topic: &str) -> String {
    render(ARTICLE_USER, &[("topic", topic)]).trim().to_string()
}
