//! `head` command: print `<head>` tags for a page.

use crate::cli::args::HeadArgs;
use crate::config::SiteConfig;
use crate::seo::head::{HeadTags, PageRef};
use anyhow::Result;

pub fn run_head(args: &HeadArgs, config: &SiteConfig) -> Result<()> {
    print!("{}", render_head(args, config));
    Ok(())
}

fn render_head(args: &HeadArgs, config: &SiteConfig) -> String {
    let page = PageRef::new(args.title.as_deref(), &args.path);
    HeadTags::from_config(config, page).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_config_path;

    #[test]
    fn test_render_head_for_post() {
        let config = SiteConfig::load(&demo_config_path()).unwrap();
        let args = HeadArgs {
            title: Some("Hello".into()),
            path: "posts/hello/".into(),
        };
        let html = render_head(&args, &config);
        assert!(html.starts_with("<title>Hello - @Betree's Blog</title>\n"));
        assert!(html.contains("https://blog.benjamin.piouffle.com/posts/hello/"));
    }
}
