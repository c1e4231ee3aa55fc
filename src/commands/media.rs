//! Media page: links to shared photo and video folders.

use super::common::{emit, heading, require_store, CommandContext, PageView};
use crate::{
    store::{
        models::{MediaFolder, Table},
        records::select_or_empty,
        Query, RecordStore,
    },
    Result,
};

/// Newest season first.
pub fn media_query() -> Query {
    Query::new(Table::MediaFolders).order("season_year", false)
}

pub async fn load_media<S: RecordStore>(ctx: &CommandContext<S>) -> PageView<Vec<MediaFolder>> {
    if let Some(setup) = require_store(ctx) {
        return setup;
    }
    PageView::Ready(select_or_empty(&ctx.store, &media_query()).await)
}

pub fn render_media(folders: &Vec<MediaFolder>) -> String {
    let mut out = heading("Media Gallery");
    if folders.is_empty() {
        out.push_str("No media folders yet.\n");
        return out;
    }
    for folder in folders {
        match folder.season_year {
            Some(year) => out.push_str(&format!("{} ({year})\n", folder.title)),
            None => out.push_str(&format!("{}\n", folder.title)),
        }
        if let Some(description) = &folder.description {
            out.push_str(&format!("  {description}\n"));
        }
        out.push_str(&format!("  {}\n", folder.folder_url));
    }
    out
}

/// Handle the media command
pub async fn handle_media<S: RecordStore>(ctx: &CommandContext<S>, as_json: bool) -> Result<()> {
    let view = load_media(ctx).await;
    emit(&view, as_json, render_media)
}
