//! Banner preview painter
//!
//! Paints one frame of the banner from a config snapshot. The only state kept
//! between frames is animation bookkeeping: mount timestamps, the particle batch
//! and loaded textures. None of it feeds back into the config.

use egui::text::LayoutJob;
use egui::{pos2, vec2, Align, Color32, FontId, Mesh, Painter, Pos2, Rect, Sense, Shape};

use crate::color;
use crate::config::BannerConfig;
use crate::constants::{decor, entrance, particles as particle_consts};

use super::catalog::ImageCatalog;
use super::display::{font_pixels, DisplayParams};
use super::motion;
use super::particles::ParticleField;
use super::texture::{cover_uv, BackgroundTextures};

/// Mountain ridge in the 1440x320 silhouette box: start point, then cubic
/// segments as (control 1, control 2, end), then the closing line target.
const RIDGE_START: (f32, f32) = (0.0, 224.0);
const RIDGE_LEAD: (f32, f32) = (48.0, 213.3);
const RIDGE_CUBICS: [[(f32, f32); 3]; 5] = [
    [(96.0, 203.0), (192.0, 181.0), (288.0, 181.3)],
    [(384.0, 181.0), (480.0, 203.0), (576.0, 202.7)],
    [(672.0, 203.0), (768.0, 181.0), (864.0, 181.3)],
    [(960.0, 181.0), (1056.0, 203.0), (1152.0, 208.0)],
    [(1248.0, 213.0), (1344.0, 203.0), (1392.0, 197.3)],
];
const RIDGE_END: (f32, f32) = (1440.0, 192.0);
const RIDGE_BOX: (f32, f32) = (1440.0, 320.0);
const CUBIC_SAMPLES: usize = 12;

/// Widest the title may wrap to (56 rem)
const TITLE_MAX_WIDTH: f32 = 896.0;
/// Widest the subtitle may wrap to (42 rem)
const SUBTITLE_MAX_WIDTH: f32 = 672.0;
const TEXT_GAP: f32 = 16.0;
const TEXT_PADDING: f32 = 16.0;

pub struct Banner {
    catalog: ImageCatalog,
    textures: BackgroundTextures,
    particles: ParticleField,
    mounted_at: Option<f64>,
    mountains_mounted_at: Option<f64>,
}

impl Banner {
    pub fn new(catalog: ImageCatalog) -> Self {
        Self {
            catalog,
            textures: BackgroundTextures::default(),
            particles: ParticleField::new(),
            mounted_at: None,
            mountains_mounted_at: None,
        }
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    /// Paint the banner across the available width at the given height
    pub fn show(&mut self, ui: &mut egui::Ui, config: &BannerConfig, height: f32) {
        let params = DisplayParams::derive(config, &self.catalog);
        let now = ui.input(|i| i.time);
        let mounted_at = *self.mounted_at.get_or_insert(now);
        let elapsed = now - mounted_at;

        // The mountain layer replays its entrance each time it reappears
        let mountains_elapsed = if params.mountains {
            Some(now - *self.mountains_mounted_at.get_or_insert(now))
        } else {
            self.mountains_mounted_at = None;
            None
        };

        self.particles
            .sync(params.particle_base_duration, &mut rand::rng());

        let (rect, _response) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let painter = ui.painter_at(rect);

        self.paint_background(ui.ctx(), &painter, rect, params.image_slot);
        painter.rect_filled(rect, 0.0, params.overlay);

        if let Some(mountains_elapsed) = mountains_elapsed {
            paint_mountains(&painter, rect, mountains_elapsed);
        }
        if let Some(period) = params.sun_period {
            paint_sun(&painter, rect, params.text_color, period, elapsed);
        }
        if self.particles.is_active() {
            self.paint_particles(&painter, rect, params.text_color, elapsed);
        }
        paint_text(&painter, rect, &params, elapsed);

        // First paint shows no particles; the random draw happens only after it
        if !self.particles.is_active() {
            self.particles
                .activate(params.particle_base_duration, &mut rand::rng());
        }

        // Sun and particles loop forever, so keep frames coming
        ui.ctx().request_repaint();
    }

    fn paint_background(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, slot: usize) {
        if let Some(texture) = self.textures.get(ctx, &self.catalog, slot) {
            let uv = cover_uv(texture.size_vec2(), rect.size());
            painter.image(texture.id(), rect, uv, Color32::WHITE);
            return;
        }

        let image = &self.catalog.images()[slot];
        let top = color::parse_or(&image.top_color, "#000000");
        let bottom = color::parse_or(&image.bottom_color, "#000000");

        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), top);
        mesh.colored_vertex(rect.right_top(), top);
        mesh.colored_vertex(rect.right_bottom(), bottom);
        mesh.colored_vertex(rect.left_bottom(), bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(Shape::mesh(mesh));
    }

    fn paint_particles(&self, painter: &Painter, rect: Rect, text_color: Color32, elapsed: f64) {
        let radius = particle_consts::DIAMETER / 2.0;
        for particle in self.particles.particles() {
            let progress = motion::reverse_alternating_progress(elapsed, particle.duration);
            let origin = pos2(
                rect.left() + rect.width() * particle.left / 100.0,
                rect.top() + rect.height() * particle.top / 100.0,
            );
            let center = origin + vec2(particle.drift_x, particle.drift_y) * progress;
            let opacity = motion::sample_keyframes(&particle_consts::OPACITY_KEYFRAMES, progress);
            painter.circle_filled(center, radius, color::with_opacity(text_color, opacity));
        }
    }
}

/// Mountain ridge as points normalized to the silhouette box, left to right
pub fn mountain_ridge() -> Vec<Pos2> {
    let normalize = |(x, y): (f32, f32)| pos2(x / RIDGE_BOX.0, y / RIDGE_BOX.1);

    let mut points = vec![normalize(RIDGE_START), normalize(RIDGE_LEAD)];
    let mut from = normalize(RIDGE_LEAD);
    for [c1, c2, end] in RIDGE_CUBICS {
        let (c1, c2, end) = (normalize(c1), normalize(c2), normalize(end));
        for step in 1..=CUBIC_SAMPLES {
            let t = step as f32 / CUBIC_SAMPLES as f32;
            points.push(cubic_point(from, c1, c2, end, t));
        }
        from = end;
    }
    points.push(normalize(RIDGE_END));
    points
}

fn cubic_point(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    pos2(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

fn paint_mountains(painter: &Painter, rect: Rect, elapsed: f64) {
    let progress = motion::entrance_progress(elapsed, 0.0, decor::MOUNTAIN_ENTRANCE_SECS);
    let slide = decor::MOUNTAIN_ENTRANCE_OFFSET * (1.0 - progress);

    let layer_height = rect.height() * decor::MOUNTAIN_HEIGHT_FRACTION;
    let layer = Rect::from_min_max(
        pos2(rect.left(), rect.bottom() - layer_height + slide),
        pos2(rect.right(), rect.bottom() + slide),
    );
    let fill = color::with_opacity(Color32::WHITE, decor::MOUNTAIN_OPACITY);

    // The silhouette is a height field, so fill it as vertical strips
    let mut mesh = Mesh::default();
    let to_screen = |p: Pos2| pos2(layer.left() + p.x * layer.width(), layer.top() + p.y * layer.height());
    for pair in mountain_ridge().windows(2) {
        let (a, b) = (to_screen(pair[0]), to_screen(pair[1]));
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(a, fill);
        mesh.colored_vertex(b, fill);
        mesh.colored_vertex(pos2(b.x, layer.bottom()), fill);
        mesh.colored_vertex(pos2(a.x, layer.bottom()), fill);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    painter.add(Shape::mesh(mesh));
}

fn paint_sun(painter: &Painter, rect: Rect, text_color: Color32, period: f32, elapsed: f64) {
    let progress = motion::looping_progress(elapsed, period);
    let scale = motion::sample_keyframes(&decor::SUN_SCALE_KEYFRAMES, progress);
    let opacity = motion::sample_keyframes(&decor::SUN_OPACITY_KEYFRAMES, progress);

    let radius = decor::SUN_DIAMETER / 2.0;
    let center = pos2(
        rect.right() - decor::SUN_INSET - radius,
        rect.top() + decor::SUN_INSET + radius,
    );
    painter.circle_filled(center, radius * scale, color::with_opacity(text_color, opacity));
}

fn paint_text(painter: &Painter, rect: Rect, params: &DisplayParams, elapsed: f64) {
    let title_progress = motion::entrance_progress(elapsed, 0.0, entrance::TEXT_SECS);
    let subtitle_progress =
        motion::entrance_progress(elapsed, entrance::SUBTITLE_DELAY_SECS, entrance::TEXT_SECS);

    let available = (rect.width() - 2.0 * TEXT_PADDING).max(1.0);
    let title = layout_centered(
        painter,
        &params.title,
        params.title_font_size,
        color::with_opacity(params.text_color, title_progress),
        available.min(TITLE_MAX_WIDTH),
    );
    let subtitle = layout_centered(
        painter,
        &params.subtitle,
        params.subtitle_font_size,
        color::with_opacity(params.text_color, subtitle_progress),
        available.min(SUBTITLE_MAX_WIDTH),
    );

    let block_height = title.rect.height() + TEXT_GAP + subtitle.rect.height();
    let top = rect.center().y - block_height / 2.0;
    let center_x = rect.center().x;

    let title_y = top - entrance::TEXT_OFFSET * (1.0 - title_progress);
    painter.galley(pos2(center_x, title_y), title, params.text_color);

    let subtitle_top = top + block_height - subtitle.rect.height();
    let subtitle_y = subtitle_top + entrance::TEXT_OFFSET * (1.0 - subtitle_progress);
    painter.galley(pos2(center_x, subtitle_y), subtitle, params.text_color);
}

fn layout_centered(
    painter: &Painter,
    text: &str,
    size_rem: f32,
    color: Color32,
    wrap_width: f32,
) -> std::sync::Arc<egui::Galley> {
    let font = FontId::proportional(font_pixels(size_rem));
    let mut job = LayoutJob::simple(text.to_owned(), font, color, wrap_width);
    job.halign = Align::Center;
    painter.layout_job(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BannerUpdate, ConfigStore, LaunchConfig};
    use crate::constants::particles::COUNT;

    fn banner() -> Banner {
        Banner::new(ImageCatalog::new(LaunchConfig::default().images).unwrap())
    }

    /// Run one headless frame at `time` and return its output
    fn paint_frame(
        ctx: &egui::Context,
        banner: &mut Banner,
        config: &BannerConfig,
        time: f64,
    ) -> egui::FullOutput {
        let input = egui::RawInput {
            time: Some(time),
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| banner.show(ui, config, 300.0));
        })
    }

    fn circle_count(output: &egui::FullOutput) -> usize {
        output
            .shapes
            .iter()
            .filter(|clipped| matches!(clipped.shape, Shape::Circle(_)))
            .count()
    }

    #[test]
    fn test_first_paint_has_no_particles() {
        let ctx = egui::Context::default();
        let mut banner = banner();
        // Sun off, so every circle painted is a particle
        let config = BannerConfig {
            show_sun: false,
            ..BannerConfig::default()
        };
        assert!(!banner.particles.is_active());

        let first = paint_frame(&ctx, &mut banner, &config, 0.0);
        assert_eq!(circle_count(&first), 0);
        // Activated once the first paint completed
        assert!(banner.particles.is_active());
        assert_eq!(banner.particles.particles().len(), COUNT);

        let second = paint_frame(&ctx, &mut banner, &config, 0.1);
        assert_eq!(circle_count(&second), COUNT);
    }

    #[test]
    fn test_particle_batch_follows_animation_speed() {
        let ctx = egui::Context::default();
        let mut banner = banner();
        let mut store = ConfigStore::default();

        paint_frame(&ctx, &mut banner, store.snapshot(), 0.0);
        let first = banner.particles.particles().to_vec();
        for particle in &first {
            assert!((2.0..=4.0).contains(&particle.duration));
        }

        // Unrelated changes keep the batch
        store.update(BannerUpdate::Title("Other".to_string()));
        paint_frame(&ctx, &mut banner, store.snapshot(), 0.1);
        assert_eq!(banner.particles.particles(), first.as_slice());

        store.update(BannerUpdate::AnimationSpeed(4.0));
        paint_frame(&ctx, &mut banner, store.snapshot(), 0.2);
        assert_eq!(banner.particles.particles().len(), COUNT);
        for particle in banner.particles.particles() {
            assert!((4.0..=6.0).contains(&particle.duration));
        }
    }

    #[test]
    fn test_mountain_entrance_restarts_when_reshown() {
        let ctx = egui::Context::default();
        let mut banner = banner();
        let mut store = ConfigStore::default();

        paint_frame(&ctx, &mut banner, store.snapshot(), 0.0);
        assert_eq!(banner.mountains_mounted_at, Some(0.0));

        // Other updates do not replay the entrance
        store.update(BannerUpdate::FontSize(4.0));
        paint_frame(&ctx, &mut banner, store.snapshot(), 0.5);
        assert_eq!(banner.mountains_mounted_at, Some(0.0));

        store.update(BannerUpdate::ShowMountains(false));
        paint_frame(&ctx, &mut banner, store.snapshot(), 1.0);
        assert_eq!(banner.mountains_mounted_at, None);

        store.update(BannerUpdate::ShowMountains(true));
        paint_frame(&ctx, &mut banner, store.snapshot(), 2.0);
        assert_eq!(banner.mountains_mounted_at, Some(2.0));
    }

    #[test]
    fn test_degenerate_font_sizes_still_paint() {
        for font_size in [1.0e6, 100.0, -3.0, -10.0, f32::NAN] {
            let ctx = egui::Context::default();
            let mut banner = banner();
            let config = BannerConfig {
                font_size,
                ..BannerConfig::default()
            };
            paint_frame(&ctx, &mut banner, &config, 0.0);
            paint_frame(&ctx, &mut banner, &config, 1.0);
        }
    }

    #[test]
    fn test_ridge_spans_full_width() {
        let ridge = mountain_ridge();
        assert_eq!(ridge.first().map(|p| p.x), Some(0.0));
        assert_eq!(ridge.last().map(|p| p.x), Some(1.0));
        assert_eq!(ridge.len(), 2 + RIDGE_CUBICS.len() * CUBIC_SAMPLES + 1);
    }

    #[test]
    fn test_ridge_is_a_height_field() {
        let ridge = mountain_ridge();
        for pair in ridge.windows(2) {
            assert!(pair[1].x >= pair[0].x, "ridge must advance left to right");
        }
        for point in &ridge {
            assert!((0.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn test_cubic_endpoints() {
        let (p0, p1, p2, p3) = (pos2(0.0, 0.0), pos2(1.0, 2.0), pos2(3.0, 2.0), pos2(4.0, 0.0));
        assert_eq!(cubic_point(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_point(p0, p1, p2, p3, 1.0), p3);
    }
}
