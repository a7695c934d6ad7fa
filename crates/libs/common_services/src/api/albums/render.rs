//! HTML rendering for the album listing.

use crate::api::albums::interfaces::{AlbumView, AlbumsPage};
use crate::utils::escape_html;

const DEFAULT_TITLE: &str = "Photo Albums";

/// Renders the full album page. All manifest-supplied text is HTML escaped.
#[must_use]
pub fn render_albums_page(page: &AlbumsPage) -> String {
    let title = escape_html(page.title.as_deref().unwrap_or(DEFAULT_TITLE));
    let albums: String = page.albums.iter().map(render_album).collect();

    format!(
        r#"<!doctype html>
<html>
  <head>
    <title>{title}</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <style>
      body {{ font-family: sans-serif; margin: 2em auto; max-width: 960px; }}
      ul.albums {{ list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1.5em; }}
      li.album {{ width: 280px; }}
      li.album img.cover {{ width: 100%; border-radius: 4px; }}
      li.album .name {{ font-size: 1.2em; }}
    </style>
  </head>
  <body>
    <h1>{title}</h1>
    <ul class="albums">
{albums}    </ul>
  </body>
</html>
"#
    )
}

fn render_album(album: &AlbumView) -> String {
    let url = escape_html(&album.url);
    let name = escape_html(album.name.as_deref().unwrap_or(&album.url));

    let mut html = String::from("      <li class=\"album\">\n");
    html.push_str(&format!("        <a href=\"{url}\">\n"));
    if let Some(cover_url) = &album.cover_url {
        html.push_str(&format!(
            "          <img class=\"cover\" src=\"{}\" alt=\"{name}\" />\n",
            escape_html(cover_url)
        ));
    }
    html.push_str(&format!("          <span class=\"name\">{name}</span>\n"));
    html.push_str("        </a>\n");
    if let Some(icon) = album.icon {
        html.push_str(&format!(
            "        <img class=\"icon\" src=\"{}\" alt=\"{}\" style=\"height: {}\" />\n",
            icon.src, icon.alt, icon.height
        ));
    }
    if let Some(description) = &album.description {
        html.push_str(&format!(
            "        <p class=\"description\">{}</p>\n",
            escape_html(description)
        ));
    }
    html.push_str("      </li>\n");
    html
}

/// The inline fragment shown in place of the album page when the manifest can't be fetched.
#[must_use]
pub fn render_error_fragment(message: &str) -> String {
    format!("<h3>Error!</h3><div>{}</div>", escape_html(message))
}
