use crossterm::style::Color;
use rand::Rng;

/// Confetti glyphs for the win celebration
const CONFETTI_CHARS: &[char] = &['*', '✦', '✧', '◆', '◇', '○', '●', '▲'];

/// A single confetti particle
#[derive(Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    pub glyph: char,
    pub color: Color,
    lifetime: f32,
}

impl Particle {
    fn spawn(width: u16) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: 0.0,
            vx: rng.gen_range(-0.4..0.4),
            vy: rng.gen_range(0.2..0.7),
            glyph: CONFETTI_CHARS[rng.gen_range(0..CONFETTI_CHARS.len())],
            color: random_bright_color(),
            lifetime: rng.gen_range(40.0..120.0),
        }
    }

    fn is_alive(&self, width: u16, height: u16) -> bool {
        self.lifetime > 0.0
            && self.x >= 0.0
            && self.x < width as f32
            && self.y < height as f32
    }
}

/// Confetti field shown over the board after the winning move
pub struct WinScreen {
    particles: Vec<Particle>,
    frame: u32,
    width: u16,
    height: u16,
}

impl WinScreen {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            frame: 0,
            width: 80,
            height: 24,
        }
    }

    /// Restart the celebration for the given drawing area
    pub fn reset(&mut self, width: u16, height: u16) {
        self.particles.clear();
        self.frame = 0;
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Advance one animation tick: drift, cull, and top up the field
    pub fn update(&mut self) {
        self.frame += 1;

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.lifetime -= 1.0;
        }
        let (width, height) = (self.width, self.height);
        self.particles.retain(|p| p.is_alive(width, height));

        // Ease spawning off after the initial burst
        let target = if self.frame < 90 { 60 } else { 25 };
        let mut rng = rand::thread_rng();
        while self.particles.len() < target {
            let mut p = Particle::spawn(self.width);
            // Stagger entry heights so the field fills quickly
            if self.frame < 3 {
                p.y = rng.gen_range(0.0..self.height as f32);
            }
            self.particles.push(p);
        }
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

impl Default for WinScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// A random bright terminal color
fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}
