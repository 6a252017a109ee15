//! `<head>` tags: title, description, Open Graph and Twitter Card.
//!
//! Pure data built from the site config. Page templates either embed the
//! rendered fragment or read the fields directly.

use crate::config::SiteConfig;
use crate::generator::manifest::MANIFEST_FILE;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// The page the tags are rendered for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRef<'a> {
    /// Page title; `None` for the home page.
    pub title: Option<&'a str>,
    /// Site path of the page, e.g. `posts/hello/`.
    pub path: &'a str,
}

impl<'a> PageRef<'a> {
    pub fn new(title: Option<&'a str>, path: &'a str) -> Self {
        Self { title, path }
    }

    fn is_home(&self) -> bool {
        self.title.is_none_or(str::is_empty)
    }
}

/// Head tags for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadTags<'a> {
    pub title: String,
    pub description: &'a str,
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub url: String,
    pub image: Option<String>,
    pub locale: String,
    pub twitter_card: &'static str,
    pub twitter_creator: Option<String>,
    pub theme_color: Option<&'a str>,
    pub manifest_href: String,
    /// Profile URLs for `rel="me"` identity links.
    pub me_links: Vec<&'a str>,
}

impl<'a> HeadTags<'a> {
    pub fn from_config(config: &'a SiteConfig, page: PageRef<'_>) -> Self {
        let image = config.image_url();
        let twitter_card = if image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };

        Self {
            title: config.page_title(page.title),
            description: &config.site.description,
            og_type: if page.is_home() { "website" } else { "article" },
            site_name: &config.site.title,
            url: config.absolute_url(page.path),
            image,
            locale: og_locale(&config.site.language),
            twitter_card,
            twitter_creator: config.author.twitter_handle(),
            theme_color: config.manifest.theme_color.as_color(),
            manifest_href: format!(
                "{}/{MANIFEST_FILE}",
                config.site.path_prefix.trim_end_matches('/')
            ),
            me_links: config
                .author
                .social
                .iter()
                .map(|link| link.url.as_str())
                .collect(),
        }
    }

    /// Render as an HTML fragment, one tag per line.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(1024);

        writeln!(html, "<title>{}</title>", escape(&self.title)).ok();
        meta_name(&mut html, "description", self.description);

        meta_property(&mut html, "og:type", self.og_type);
        meta_property(&mut html, "og:site_name", self.site_name);
        meta_property(&mut html, "og:title", &self.title);
        meta_property(&mut html, "og:description", self.description);
        meta_property(&mut html, "og:url", &self.url);
        if let Some(image) = &self.image {
            meta_property(&mut html, "og:image", image);
        }
        meta_property(&mut html, "og:locale", &self.locale);

        meta_name(&mut html, "twitter:card", self.twitter_card);
        if let Some(creator) = &self.twitter_creator {
            meta_name(&mut html, "twitter:creator", creator);
        }

        if let Some(color) = self.theme_color {
            meta_name(&mut html, "theme-color", color);
        }
        writeln!(
            html,
            r#"<link rel="manifest" href="{}">"#,
            escape_attr(&self.manifest_href)
        )
        .ok();
        for href in &self.me_links {
            writeln!(html, r#"<link rel="me" href="{}">"#, escape_attr(href)).ok();
        }

        html
    }
}

fn meta_name(html: &mut String, name: &str, content: &str) {
    writeln!(
        html,
        r#"<meta name="{name}" content="{}">"#,
        escape_attr(content)
    )
    .ok();
}

fn meta_property(html: &mut String, property: &str, content: &str) {
    writeln!(
        html,
        r#"<meta property="{property}" content="{}">"#,
        escape_attr(content)
    )
    .ok();
}

/// `og:locale` uses `language_TERRITORY`: `pt-BR` -> `pt_BR`.
fn og_locale(language: &str) -> String {
    language.replace('-', "_")
}
