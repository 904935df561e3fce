use std::f64::consts::{PI, TAU};

use sim::{Particle, ParticleShape, Point, Projectile};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn hsl(hue: f64) -> String {
    format!("hsl({hue:.1}, 100%, 50%)")
}

/// Paints a translucent black veil over the canvas so earlier frames fade into trails.
pub fn draw_trail(context: &CanvasRenderingContext2d, bounds: Point, alpha: f64) {
    context.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
    context.fill_rect(0.0, 0.0, bounds.0, bounds.1);
}

pub fn draw_projectile(
    context: &CanvasRenderingContext2d,
    projectile: &Projectile,
    radius: f64,
    glow: f64,
) -> Result<(), JsValue> {
    let position = projectile.position();
    let color = hsl(projectile.hue());

    context.save();

    context.set_shadow_blur(glow);
    context.set_shadow_color(&color);
    context.set_fill_style_str(&color);
    context.begin_path();
    context.arc(position.0, position.1, radius, 0.0, TAU)?;
    context.fill();

    context.restore();

    Ok(())
}

pub fn draw_particle(
    context: &CanvasRenderingContext2d,
    particle: &Particle,
    shape: ParticleShape,
) -> Result<(), JsValue> {
    context.save();

    context.set_global_alpha(particle.alpha);
    context.set_fill_style_str(&hsl(particle.hue));
    context.translate(particle.position.0, particle.position.1)?;

    match shape {
        ParticleShape::Circle => {
            context.begin_path();
            context.arc(0.0, 0.0, particle.size, 0.0, TAU)?;
        }
        ParticleShape::Star => {
            context.rotate(particle.rotation)?;
            trace_star(context, particle.size * 2.0, particle.size);
        }
    }

    context.fill();
    context.restore();

    Ok(())
}

/// Traces a five-pointed star centred on the origin, first point straight up.
fn trace_star(context: &CanvasRenderingContext2d, outer: f64, inner: f64) {
    context.begin_path();

    for vertex in 0..10 {
        let radius = if vertex % 2 == 0 { outer } else { inner };
        let angle = vertex as f64 * PI / 5.0 - PI / 2.0;

        if vertex == 0 {
            context.move_to(angle.cos() * radius, angle.sin() * radius);
        } else {
            context.line_to(angle.cos() * radius, angle.sin() * radius);
        }
    }

    context.close_path();
}
