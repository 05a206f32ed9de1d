// src/specs/posts.rs
//! Reader for blog index pages: links whose text contains `デッキリスト比較`
//! and the `a.pager_next_link` that leads to the next index page.

use serde::{Deserialize, Serialize};

use crate::config::consts::{PAGER_NEXT_CLASS, POST_TITLE_MARKER};
use crate::core::{html, net};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub url: String,
}

/// Posts in page order (absolute URLs, de-duplicated) and the next page, if any.
pub fn parse_index(doc: &str, base: &str) -> (Vec<Post>, Option<String>) {
    let mut posts: Vec<Post> = Vec::new();
    let mut next = None;

    for a in html::elements(doc, "a") {
        let open = html::open_tag(a);
        let Some(href) = html::attr(open, "href") else { continue };

        if next.is_none() && html::has_class(open, PAGER_NEXT_CLASS) {
            next = net::resolve(base, &href).ok();
            continue;
        }

        let title = html::text(a);
        if !title.contains(POST_TITLE_MARKER) {
            continue;
        }
        match net::resolve(base, &href) {
            Ok(url) => {
                if !posts.iter().any(|p| p.url == url) {
                    posts.push(Post { title, url });
                }
            }
            Err(e) => logd!("Posts: skipped link {title:?}: {e}"),
        }
    }
    (posts, next)
}

/// Append `more` to `posts`, skipping URLs already present.
pub fn merge(posts: &mut Vec<Post>, more: Vec<Post>) {
    for p in more {
        if !posts.iter().any(|q| q.url == p.url) {
            posts.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"
<div class="entry"><a href="/blog-entry-1470.html">【10/18】デッキリスト比較 ローテ</a></div>
<div class="entry"><a href="blog-entry-1469.html">大会結果まとめ</a></div>
<div class="entry"><A HREF="https://svlabo.jp/blog-entry-1470.html">【10/18】デッキリスト比較 ローテ</A></div>
<div class="entry"><a href="/blog-entry-1468.html"><span>【10/17】</span>デッキリスト比較</a></div>
<a class="pager_next_link" href="/page-2.html">次へ</a>
"#;

    #[test]
    fn collects_comparison_posts() {
        let (posts, next) = parse_index(INDEX, "https://svlabo.jp/");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].url, "https://svlabo.jp/blog-entry-1470.html");
        assert_eq!(posts[0].title, "【10/18】デッキリスト比較 ローテ");
        assert_eq!(posts[1].title, "【10/17】デッキリスト比較");
        assert_eq!(next.as_deref(), Some("https://svlabo.jp/page-2.html"));
    }

    #[test]
    fn last_page_has_no_next() {
        let (posts, next) = parse_index("<p>no links</p>", "https://svlabo.jp/page-9.html");
        assert!(posts.is_empty());
        assert!(next.is_none());
    }

    #[test]
    fn merge_skips_known_urls() {
        let a = Post { title: s!("a"), url: s!("u1") };
        let b = Post { title: s!("b"), url: s!("u2") };
        let mut posts = vec![a.clone()];
        merge(&mut posts, vec![a, b.clone()]);
        assert_eq!(posts, vec![Post { title: s!("a"), url: s!("u1") }, b]);
    }
}
