//! Decorative particle field for the page background: drifting dots that
//! bounce off the edges, fade and pulse, and link to neighbours within range.
//! Moving the pointer over the field connects the particles around it.
//!
//! The field is pure state; `frontend` owns the canvas and the animation loop.

use std::f64::consts::TAU;

/// Nominal frame length; velocities are expressed per frame at this rate.
const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedRange {
    pub min: f64,
    pub max: f64,
    pub speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleOptions {
    pub count: usize,
    pub density_area: f64,
    pub move_speed: f64,
    pub opacity: AnimatedRange,
    pub radius: AnimatedRange,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub connect_radius: f64,
    pub connect_distance: f64,
    pub connect_opacity: f64,
    pub fps_limit: f64,
    pub background: &'static str,
    pub color: &'static str,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 50,
            density_area: 800.0,
            move_speed: 1.0,
            opacity: AnimatedRange {
                min: 0.1,
                max: 0.5,
                speed: 0.5,
            },
            radius: AnimatedRange {
                min: 0.5,
                max: 2.0,
                speed: 1.0,
            },
            link_distance: 150.0,
            link_opacity: 0.3,
            connect_radius: 60.0,
            connect_distance: 100.0,
            connect_opacity: 0.5,
            fps_limit: 60.0,
            background: "#000000",
            color: "255, 255, 255",
        }
    }
}

impl ParticleOptions {
    /// Particle count for a canvas, scaled so that `count` particles cover one
    /// `density_area` x `density_area` square.
    pub fn count_for(&self, width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 || self.density_area <= 0.0 {
            return 0;
        }

        let factor = (width * height) / (self.density_area * self.density_area);
        ((self.count as f64) * factor).round().max(1.0) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
    vx: f64,
    vy: f64,
    radius_step: f64,
    opacity_step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

pub struct ParticleField {
    options: ParticleOptions,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
}

impl ParticleField {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(
        width: f64,
        height: f64,
        options: ParticleOptions,
        random: &mut impl FnMut() -> f64,
    ) -> Self {
        let count = options.count_for(width, height);
        let particles = (0..count)
            .map(|_| spawn_particle(&options, width, height, random))
            .collect();

        Self {
            options,
            width,
            height,
            particles,
            pointer: None,
        }
    }

    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopts a new canvas size, adding or dropping particles to keep the
    /// density and pulling stragglers back inside.
    pub fn resize(&mut self, width: f64, height: f64, random: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;

        let target = self.options.count_for(width, height);
        self.particles.truncate(target);
        while self.particles.len() < target {
            let particle = spawn_particle(&self.options, width, height, random);
            self.particles.push(particle);
        }

        for particle in &mut self.particles {
            particle.x = clamp_into(particle.x, particle.radius, width);
            particle.y = clamp_into(particle.y, particle.radius, height);
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    /// Advances the simulation by `frames` reference frames.
    pub fn step(&mut self, frames: f64) {
        let (width, height) = (self.width, self.height);
        let opacity = self.options.opacity;
        let radius = self.options.radius;

        for particle in &mut self.particles {
            particle.opacity += particle.opacity_step * frames;
            oscillate(&mut particle.opacity, &mut particle.opacity_step, opacity);

            // size first so the bounce below sees the radius being drawn
            particle.radius += particle.radius_step * frames;
            oscillate(&mut particle.radius, &mut particle.radius_step, radius);

            particle.x += particle.vx * frames;
            particle.y += particle.vy * frames;
            bounce(&mut particle.x, &mut particle.vx, particle.radius, width);
            bounce(&mut particle.y, &mut particle.vy, particle.radius, height);
        }
    }

    /// Links between every pair closer than `link_distance`, fading with
    /// distance.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        let max = self.options.link_distance;

        for (index, a) in self.particles.iter().enumerate() {
            for b in &self.particles[index + 1..] {
                let distance = distance((a.x, a.y), (b.x, b.y));
                if distance < max {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: self.options.link_opacity * (1.0 - distance / max),
                    });
                }
            }
        }

        links
    }

    /// Links among the particles around the pointer. Empty when the pointer
    /// is outside the canvas.
    pub fn pointer_links(&self) -> Vec<Link> {
        let Some(pointer) = self.pointer else {
            return Vec::new();
        };

        let near = self
            .particles
            .iter()
            .filter(|particle| distance(pointer, (particle.x, particle.y)) <= self.options.connect_radius)
            .collect::<Vec<_>>();

        let mut links = Vec::new();
        for (index, a) in near.iter().enumerate() {
            for b in &near[index + 1..] {
                if distance((a.x, a.y), (b.x, b.y)) <= self.options.connect_distance {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: self.options.connect_opacity,
                    });
                }
            }
        }

        links
    }
}

fn spawn_particle(
    options: &ParticleOptions,
    width: f64,
    height: f64,
    random: &mut impl FnMut() -> f64,
) -> Particle {
    let radius = lerp(options.radius.min, options.radius.max, random());
    let opacity = lerp(options.opacity.min, options.opacity.max, random());
    let heading = random() * TAU;

    Particle {
        x: clamp_into(random() * width, radius, width),
        y: clamp_into(random() * height, radius, height),
        radius,
        opacity,
        vx: heading.cos() * options.move_speed,
        vy: heading.sin() * options.move_speed,
        radius_step: signed(options.radius.speed / 10.0, random()),
        opacity_step: signed(options.opacity.speed / 100.0, random()),
    }
}

fn bounce(position: &mut f64, velocity: &mut f64, radius: f64, extent: f64) {
    if *position - radius < 0.0 {
        *position = radius;
        *velocity = velocity.abs();
    } else if *position + radius > extent {
        *position = (extent - radius).max(radius);
        *velocity = -velocity.abs();
    }
}

fn oscillate(value: &mut f64, step: &mut f64, range: AnimatedRange) {
    if *value <= range.min {
        *value = range.min;
        *step = step.abs();
    } else if *value >= range.max {
        *value = range.max;
        *step = -step.abs();
    }
}

fn clamp_into(value: f64, radius: f64, extent: f64) -> f64 {
    value.clamp(radius, (extent - radius).max(radius))
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

fn signed(magnitude: f64, coin: f64) -> f64 {
    if coin < 0.5 {
        -magnitude
    } else {
        magnitude
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Drops animation frames that arrive faster than the fps cap and converts
/// the admitted ones into reference-frame deltas.
pub struct FrameLimiter {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameLimiter {
    pub fn new(fps_limit: f64) -> Self {
        let min_interval_ms = if fps_limit > 0.0 { 1000.0 / fps_limit } else { 0.0 };
        Self {
            min_interval_ms,
            last_ms: None,
        }
    }

    /// Returns the elapsed time in reference frames, or `None` when the frame
    /// should be skipped. Long pauses (hidden tab) are capped to a few frames.
    pub fn admit(&mut self, now_ms: f64) -> Option<f64> {
        let Some(last_ms) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return Some(1.0);
        };

        let elapsed = now_ms - last_ms;
        // 1ms slack so 60Hz displays don't drop every other frame
        if elapsed + 1.0 < self.min_interval_ms {
            return None;
        }

        self.last_ms = Some(now_ms);
        Some((elapsed / REFERENCE_FRAME_MS).clamp(0.0, 4.0))
    }
}
