//! Render command: fixture in, PNG and/or terminal preview out.

use image::RgbaImage;
use tracing::info;

use super::args::RenderArgs;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::fixture::ListFixture;
use crate::surface::terminal::preview_inline;
use crate::ui::context::PaintContext;
use crate::ui::dialogs::BadgeCache;
use crate::ui::list::render_list;
use crate::ui::style::RowVariant;
use crate::ui::theme::{Fonts, Strings, Theme};

/// Widest terminal preview, in cells
const PREVIEW_COLUMNS: u16 = 100;

/// Apply command-line overrides on top of the environment configuration
pub fn merge_config(args: &RenderArgs, config: RenderConfig) -> RenderConfig {
    let mut config = config;
    if let Some(width) = args.width {
        config = config.with_width(width);
    }
    if args.compact {
        config = config.with_variant(RowVariant::Compact);
    }
    if args.narrow {
        config = config.with_narrow(true);
    }
    config
}

/// Render the fixture named by `args` (or the sample list) into an image
pub fn render_image(args: &RenderArgs, config: &RenderConfig) -> RenderResult<RgbaImage> {
    let fixture = match &args.input {
        Some(path) => ListFixture::load(path)?,
        None => ListFixture::sample(),
    };
    let palette = config.load_palette()?;
    let styles = config.load_style()?;
    let theme = Theme::new(palette, Fonts::default(), Strings::default());
    let badges = BadgeCache::new(&theme.palette);

    let st = styles.row(config.variant);
    let width = if config.narrow {
        st.padding.left + st.photo_size + st.padding.right
    } else {
        config.width
    };
    let context = PaintContext::new(st, &styles.metrics, &theme, &badges, width, fixture.now())
        .with_narrow(config.narrow)
        .with_frame_time(fixture.frame_time);

    let typing = fixture.typing_indicators(theme.fonts.text.as_ref());
    let frame = fixture.frame(&typing);
    Ok(render_list(&frame, &context).into_image())
}

/// Handle the default render command.
pub fn handle_render_command(args: &RenderArgs) -> RenderResult<()> {
    let config = merge_config(args, RenderConfig::from_env());
    let image = render_image(args, &config)?;

    if let Some(path) = &args.output {
        image.save(path)?;
        info!(path = %path.display(), width = image.width(), height = image.height(), "Wrote list image");
    }
    if args.preview || args.output.is_none() {
        let backdrop = config.load_palette()?.bg.normal;
        preview_inline(&image, backdrop, PREVIEW_COLUMNS)?;
    }
    Ok(())
}
