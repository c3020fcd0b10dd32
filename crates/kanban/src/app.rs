use kanban_engine::{paint_banner, Banner, DisplaySurface, EngineError, GlyphTable, Result, SurfaceEvent};

/// Paint `banner` and keep it on screen until a quit key arrives, repainting
/// from scratch whenever the surface is resized. The surface is restored
/// before returning, also when painting failed.
///
/// # Errors
///
/// Fails on surface errors and on banners without visible columns.
pub fn run(surface: &mut dyn DisplaySurface, table: &GlyphTable, banner: &Banner) -> Result<()> {
    let result = event_loop(surface, table, banner);
    let restored = surface.restore();
    result.and(restored)
}

fn event_loop(surface: &mut dyn DisplaySurface, table: &GlyphTable, banner: &Banner) -> Result<()> {
    render(surface, table, banner)?;
    surface.show()?;
    loop {
        match surface.poll_event()? {
            SurfaceEvent::Resize(size) => {
                log::debug!("resized to {size}");
                render(surface, table, banner)?;
                surface.sync()?;
            }
            SurfaceEvent::Key(key) if key.is_quit() => {
                log::info!("quit on {key:?}");
                return Ok(());
            }
            _ => {}
        }
    }
}

fn render(surface: &mut dyn DisplaySurface, table: &GlyphTable, banner: &Banner) -> Result<()> {
    match paint_banner(surface, table, banner) {
        Ok(layout) => {
            log::debug!("painted {} lines at scale {}", banner.len(), layout.scale);
            Ok(())
        }
        // a collapsed terminal shows nothing until it grows again
        Err(EngineError::EmptySurface { width, height }) => {
            log::debug!("nothing to paint on a {width}x{height} surface");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
