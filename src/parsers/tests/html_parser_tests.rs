use crate::parsers::html;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_text_prefers_main() {
        let page = r#"<html><head><title>A page title that is long enough to count</title>
            <style>body { font-family: sans-serif; color: #333333; }</style></head>
            <body>
              <nav>Home About Contact</nav>
              <p>This paragraph lives outside of the main element.</p>
              <main>
                <h1>Welcome to the bakery on Main Street</h1>
                <script>var tracking = "this text must never be extracted";</script>
                <p>We bake fresh sourdough bread every single morning.</p>
              </main>
              <footer>Copyright 2024 Main Street Bakery Ltd</footer>
            </body></html>"#;

        assert_eq!(
            html::extract_text(page),
            "Welcome to the bakery on Main Street\nWe bake fresh sourdough bread every single morning."
        );
    }

    #[test]
    fn test_text_falls_back_to_article_then_body() {
        let article = r#"<body><div>Sidebar content that is long enough to keep</div>
            <article><p>Article content that should be the only output.</p></article></body>"#;
        assert_eq!(
            html::extract_text(article),
            "Article content that should be the only output."
        );

        let body = r#"<body><div>Body content is used when nothing better exists.</div></body>"#;
        assert_eq!(
            html::extract_text(body),
            "Body content is used when nothing better exists."
        );
    }

    #[test]
    fn test_text_skips_hidden_subtrees() {
        let page = r#"<body>
            <noscript>Please enable JavaScript to use this website properly.</noscript>
            <svg><text>Vector graphic label text that is quite long</text></svg>
            <style>.banner { background: url(/really/long/background.png); }</style>
            <p>Only this sentence is visible prose for the reader.</p>
            </body>"#;

        assert_eq!(
            html::extract_text(page),
            "Only this sentence is visible prose for the reader."
        );
    }

    #[test]
    fn test_text_root_ignores_main_inside_hidden_subtree() {
        let page = "<body><svg><main>Hidden vector label text that is long enough</main></svg>\
                    <p>Visible body paragraph that should be extracted here.</p></body>";

        assert_eq!(
            html::extract_text(page),
            "Visible body paragraph that should be extracted here."
        );
    }

    #[test]
    fn test_text_empty_for_blank_or_malformed_html() {
        assert_eq!(html::extract_text(""), "");
        assert_eq!(html::extract_text("<div><p>short</span>"), "");
        assert_eq!(
            html::extract_text("<p>An unclosed paragraph that still has enough text"),
            "An unclosed paragraph that still has enough text"
        );
    }

    #[test]
    fn test_single_relative_image() {
        let images =
            html::extract_images(r#"<img src="/a.png">"#, &base("https://ex.com/page"), 10);
        assert_eq!(images, vec!["https://ex.com/a.png"]);
    }

    #[test]
    fn test_image_lazy_load_fallbacks() {
        let page = r#"
            <img data-src="lazy.jpg">
            <img src="" data-lazy-src="/lazy-two.webp">
            <img src="  " data-original="//cdn.ex.com/original.png">
            <img alt="no source at all">
        "#;

        let images = html::extract_images(page, &base("https://ex.com/dir/page"), 10);
        assert_eq!(
            images,
            vec![
                "https://ex.com/dir/lazy.jpg",
                "https://ex.com/lazy-two.webp",
                "https://cdn.ex.com/original.png",
            ]
        );
    }

    #[test]
    fn test_image_src_takes_priority() {
        let page = r#"<img src="/real.png" data-src="/placeholder.png">"#;
        let images = html::extract_images(page, &base("https://ex.com/"), 10);
        assert_eq!(images, vec!["https://ex.com/real.png"]);
    }

    #[test]
    fn test_images_skip_data_and_foreign_schemes() {
        let page = r#"
            <img src="data:image/png;base64,iVBORw0KGgo=">
            <img src="ftp://files.ex.com/logo.png">
            <img src="javascript:alert(1)">
            <img src="/kept.png">
        "#;

        let images = html::extract_images(page, &base("https://ex.com/"), 10);
        assert_eq!(images, vec!["https://ex.com/kept.png"]);
    }

    #[test]
    fn test_images_deduplicated_and_capped() {
        let page = r#"
            <img src="/a.png"><img src="https://ex.com/a.png"><img src="./a.png">
            <img src="/b.png"><img src="/c.png"><img src="/d.png">
        "#;

        let images = html::extract_images(page, &base("https://ex.com/"), 2);
        assert_eq!(images, vec!["https://ex.com/a.png", "https://ex.com/b.png"]);

        assert!(html::extract_images(page, &base("https://ex.com/"), 0).is_empty());
    }

    #[test]
    fn test_cross_domain_link_excluded() {
        let page = r#"<a href="https://other.com/x">Other</a>"#;
        assert!(html::extract_links(page, &base("https://ex.com"), 10).is_empty());
    }

    #[test]
    fn test_internal_links() {
        let page = r##"
            <a href="">Empty</a>
            <a href="#top">Top</a>
            <a href="mailto:owner@ex.com">Mail</a>
            <a href="tel:+15551234">Call</a>
            <a href="javascript:void(0)">Script</a>
            <a href="/about#team">About</a>
            <a href="/about">About again</a>
            <a href="contact">Contact</a>
            <a href="https://EX.com/menu">Menu</a>
            <a href="/files/menu.PDF">Menu PDF</a>
            <a href="/gallery/cake.jpg">Photo</a>
            <a href="http://ex.com:8080/admin">Other port</a>
            <a>No href</a>
        "##;

        let links = html::extract_links(page, &base("https://ex.com/"), 10);
        let links: Vec<&str> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            links,
            vec![
                "https://ex.com/about",
                "https://ex.com/contact",
                "https://ex.com/menu",
            ]
        );
    }

    #[test]
    fn test_links_capped() {
        let page = r#"<a href="/one">1</a><a href="/two">2</a><a href="/three">3</a>"#;

        let links = html::extract_links(page, &base("https://ex.com/"), 2);
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].as_str(), "https://ex.com/two");

        assert!(html::extract_links(page, &base("https://ex.com/"), 0).is_empty());
    }
}
