//! Blocking X11 connection and the EWMH surface the operations consume.
//!
//! Everything here is a synchronous round trip with no retries; a transport
//! failure aborts the whole invocation.

use tracing::debug;
use x11rb::{
    atom_manager,
    connection::{Connection, RequestConnection as _},
    protocol::{
        xinerama::{self, ConnectionExt as _},
        xproto::{AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, Window},
    },
    rust_connection::RustConnection,
};

use crate::{geom::Rect, place::Offset, strut::Strut, Error, Result};

atom_manager! {
    /// EWMH atoms interned once at connection time.
    Atoms:
    AtomsCookie {
        _NET_CLIENT_LIST,
        _NET_WM_STRUT_PARTIAL,
        _NET_WM_STRUT,
        _NET_ACTIVE_WINDOW,
        _NET_MOVERESIZE_WINDOW,
    }
}

/// `_NET_MOVERESIZE_WINDOW` flag word: x/y/width/height are all supplied,
/// source indication is 2 (pager/tool).
const MOVERESIZE_FLAGS: u32 = (1 << 8) | (1 << 9) | (1 << 10) | (1 << 11) | (2 << 12);

/// One X server connection plus the root window it operates on.
pub struct XConn {
    conn: RustConnection,
    root: Window,
    root_geometry: Rect,
    atoms: Atoms,
}

impl XConn {
    /// Connect to the display named by `$DISPLAY`.
    ///
    /// Reads the root geometry and interns the EWMH atoms up front; any
    /// failure here is fatal for the invocation.
    pub fn open() -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen_num].root;
        let geo = conn.get_geometry(root)?.reply()?;
        let root_geometry = Rect::new(geo.x as i32, geo.y as i32, geo.width as i32, geo.height as i32);
        let atoms = Atoms::new(&conn)?.reply()?;
        debug!("connected, root={:#x} geometry={}", root, root_geometry);
        Ok(Self {
            conn,
            root,
            root_geometry,
            atoms,
        })
    }

    /// Geometry of the whole virtual screen.
    pub fn root_geometry(&self) -> Rect {
        self.root_geometry
    }

    /// Physical head rectangles in server order (left-to-right then
    /// top-to-bottom), or a single head spanning the whole root when the
    /// Xinerama extension is missing or inactive.
    pub fn heads(&self) -> Result<Vec<Rect>> {
        if self
            .conn
            .extension_information(xinerama::X11_EXTENSION_NAME)?
            .is_some()
            && self.conn.xinerama_is_active()?.reply()?.state != 0
        {
            let screens = self.conn.xinerama_query_screens()?.reply()?;
            if !screens.screen_info.is_empty() {
                return Ok(screens
                    .screen_info
                    .iter()
                    .map(|s| Rect::new(s.x_org as i32, s.y_org as i32, s.width as i32, s.height as i32))
                    .collect());
            }
        }
        debug!("xinerama unavailable, falling back to the root geometry");
        Ok(vec![self.root_geometry])
    }

    /// Top-level windows managed by the window manager (`_NET_CLIENT_LIST`).
    pub fn client_list(&self) -> Result<Vec<Window>> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms._NET_CLIENT_LIST,
                AtomEnum::WINDOW,
                0,
                u32::MAX,
            )?
            .reply()?;
        Ok(reply.value32().map(Iterator::collect).unwrap_or_default())
    }

    /// The strut published by `win`, if any.
    ///
    /// Prefers `_NET_WM_STRUT_PARTIAL`; a window carrying only the legacy
    /// `_NET_WM_STRUT` gets full-extent spans synthesized from the root
    /// geometry. `Ok(None)` means the window reserves nothing.
    pub fn window_strut(&self, win: Window) -> Result<Option<Strut>> {
        let partial = self
            .conn
            .get_property(
                false,
                win,
                self.atoms._NET_WM_STRUT_PARTIAL,
                AtomEnum::CARDINAL,
                0,
                12,
            )?
            .reply()?;
        if let Some(values) = partial.value32() {
            let values: Vec<u32> = values.collect();
            if let Some(strut) = Strut::from_partial(&values) {
                return Ok(Some(strut));
            }
        }

        let plain = self
            .conn
            .get_property(false, win, self.atoms._NET_WM_STRUT, AtomEnum::CARDINAL, 0, 4)?
            .reply()?;
        if let Some(values) = plain.value32() {
            let values: Vec<u32> = values.collect();
            let root = self.root_geometry;
            if let Some(strut) = Strut::from_plain(&values, root.w as u32, root.h as u32) {
                return Ok(Some(strut));
            }
        }
        Ok(None)
    }

    /// The window holding input focus (`_NET_ACTIVE_WINDOW`).
    pub fn active_window(&self) -> Result<Window> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms._NET_ACTIVE_WINDOW,
                AtomEnum::WINDOW,
                0,
                1,
            )?
            .reply()?;
        match reply.value32().and_then(|mut values| values.next()) {
            Some(win) if win != x11rb::NONE => Ok(win),
            _ => Err(Error::NoActiveWindow),
        }
    }

    /// The nearest ancestor of `win` directly below the root.
    ///
    /// Under a reparenting window manager this is the decorated frame;
    /// otherwise it is `win` itself.
    pub fn frame_of(&self, win: Window) -> Result<Window> {
        let mut frame = win;
        loop {
            let tree = self.conn.query_tree(frame)?.reply()?;
            if tree.parent == tree.root || tree.parent == x11rb::NONE {
                return Ok(frame);
            }
            frame = tree.parent;
        }
    }

    /// Parent-relative geometry of `win`.
    pub fn geometry(&self, win: Window) -> Result<Rect> {
        let g = self.conn.get_geometry(win)?.reply()?;
        Ok(Rect::new(g.x as i32, g.y as i32, g.width as i32, g.height as i32))
    }

    /// Decoration offset of `win` inside its frame.
    ///
    /// Zero when the window manager does not reparent (the window is its own
    /// frame).
    pub fn inner_offset(&self, win: Window) -> Result<Offset> {
        let tree = self.conn.query_tree(win)?.reply()?;
        if tree.parent == tree.root || tree.parent == x11rb::NONE {
            return Ok(Offset::default());
        }
        let geo = self.geometry(win)?;
        Ok(Offset { x: geo.x, y: geo.y })
    }

    /// Ask the window manager to move/resize `win` to `target` via a
    /// `_NET_MOVERESIZE_WINDOW` client message on the root.
    pub fn move_resize(&self, win: Window, target: Rect) -> Result<()> {
        let data = [
            MOVERESIZE_FLAGS,
            target.x as u32,
            target.y as u32,
            target.w as u32,
            target.h as u32,
        ];
        let event = ClientMessageEvent::new(32, win, self.atoms._NET_MOVERESIZE_WINDOW, data);
        self.conn.send_event(
            false,
            self.root,
            EventMask::SUBSTRUCTURE_NOTIFY | EventMask::SUBSTRUCTURE_REDIRECT,
            event,
        )?;
        self.conn.flush()?;
        Ok(())
    }
}
