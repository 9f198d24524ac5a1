use crate::parsers::{ParseLimits, Parser};
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <main>
          <h2>Handmade furniture from reclaimed oak and walnut</h2>
          <img src="/img/table.jpg">
          <img data-src="/img/chair.jpg">
          <a href="/workshop">Our workshop</a>
          <a href="/shop">Shop</a>
          <a href="https://social.example.net/maker">Follow</a>
        </main>
    </body></html>"#;

    #[test]
    fn test_parse_collects_everything() {
        let base = Url::parse("https://maker.example.com/").unwrap();
        let limits = ParseLimits {
            max_images: 10,
            max_links: Some(10),
        };

        let result = Parser::parse(PAGE, &base, &limits);
        assert_eq!(
            result.content,
            "Handmade furniture from reclaimed oak and walnut"
        );
        assert_eq!(
            result.images,
            vec![
                "https://maker.example.com/img/table.jpg",
                "https://maker.example.com/img/chair.jpg",
            ]
        );
        let links: Vec<&str> = result.links.iter().map(Url::as_str).collect();
        assert_eq!(
            links,
            vec![
                "https://maker.example.com/workshop",
                "https://maker.example.com/shop",
            ]
        );
    }

    #[test]
    fn test_parse_without_link_discovery() {
        let base = Url::parse("https://maker.example.com/").unwrap();
        let limits = ParseLimits {
            max_images: 1,
            max_links: None,
        };

        let result = Parser::parse(PAGE, &base, &limits);
        assert!(result.links.is_empty());
        assert_eq!(result.images, vec!["https://maker.example.com/img/table.jpg"]);
    }
}
