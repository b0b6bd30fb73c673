//! The one orchestrated operation: place the focused window on the grid.

use tracing::debug;

use crate::{
    conn::XConn,
    geom::Rect,
    place::{target_rect, GridSpec, Offset},
    screen::pick_head,
    Error, Result,
};

/// Resolve the head for `focused_outer` among `heads` and compute the grid
/// target inside it.
///
/// Pure pipeline tail of [`place_grid_focused`], usable without a server.
pub fn compute_target(
    heads: &[Rect],
    focused_outer: &Rect,
    offset: Offset,
    spec: &GridSpec,
) -> Result<Rect> {
    let idx = pick_head(heads, focused_outer).ok_or(Error::NoSuitableScreen)?;
    debug!("resolved head {} of {}: {}", idx + 1, heads.len(), heads[idx]);
    Ok(target_rect(&heads[idx], spec, offset))
}

/// Place the currently focused window into the grid cell described by `spec`.
///
/// Validates the spec, enumerates heads, subtracts every client's strut,
/// resolves the focused window's head by maximal overlap, and issues a single
/// move/resize request. The per-window strut lookup is the only recoverable
/// failure along the way; everything else aborts the invocation.
pub fn place_grid_focused(conn: &XConn, spec: &GridSpec) -> Result<()> {
    spec.validate()?;

    let mut heads = conn.heads()?;
    apply_client_struts(conn, &mut heads)?;
    debug!("usable heads: {:?}", heads);

    let active = conn.active_window()?;
    let frame = conn.frame_of(active)?;
    let outer = conn.geometry(frame)?;
    let offset = conn.inner_offset(active)?;
    debug!(
        "active={:#x} frame={:#x} outer={} offset=({},{})",
        active, frame, outer, offset.x, offset.y
    );

    let target = compute_target(&heads, &outer, offset, spec)?;
    debug!("target: {}", target);
    conn.move_resize(active, target)
}

/// Shrink `heads` by the strut of every managed client, in list order.
///
/// A client without a strut, or whose strut cannot be read (it may have
/// vanished since the list was fetched), contributes nothing.
fn apply_client_struts(conn: &XConn, heads: &mut [Rect]) -> Result<()> {
    for client in conn.client_list()? {
        match conn.window_strut(client) {
            Ok(Some(strut)) => strut.apply(heads),
            Ok(None) => {}
            Err(err) => debug!("skipping strut of {:#x}: {}", client, err),
        }
    }
    Ok(())
}
