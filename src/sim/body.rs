//! Kinematic bodies and axis-aligned collision resolution
//!
//! A body moves by integrating its velocity, then gets pushed out of the
//! ground plane and out of platforms. There is no global solver: each
//! platform is resolved on its own, in registry order, so overlapping
//! platforms can give order-dependent results.

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (x, y is the top-left corner, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Which side of a platform a body was pushed out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Landed on top
    Top,
    /// Bumped the underside
    Ceiling,
    /// Pushed back out of the platform's left face
    LeftFace,
    /// Pushed back out of the platform's right face
    RightFace,
}

/// Position, velocity and size of a moving entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: UVec2,
    /// In contact with the ground or a platform top this tick
    pub grounded: bool,
}

impl KinematicBody {
    pub fn new(pos: Vec2, width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "body size must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            size: UVec2::new(width, height),
            grounded: false,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y as f32
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height()
    }

    pub fn aabb(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width(), self.height())
    }

    #[inline]
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.aabb().overlaps(rect)
    }

    /// Apply gravity, then integrate position by velocity
    pub fn step(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    /// Stand the body on the ground line if it reached it.
    ///
    /// Clears `grounded` otherwise; the platform pass may set it again.
    /// Returns true when the body is on the ground.
    pub fn resolve_ground(&mut self, ground_y: f32) -> bool {
        if self.bottom() >= ground_y {
            self.pos.y = ground_y - self.height();
            self.vel.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
        self.grounded
    }

    /// Push the body out of one platform, if they overlap.
    ///
    /// Only the first matching case fires: landing, ceiling, right-moving
    /// side hit, left-moving side hit.
    pub fn resolve_platform(&mut self, platform: &Rect) -> Option<Contact> {
        if !self.overlaps(platform) {
            return None;
        }

        if self.vel.y > 0.0 && self.pos.y < platform.top() {
            self.pos.y = platform.top() - self.height();
            self.vel.y = 0.0;
            self.grounded = true;
            Some(Contact::Top)
        } else if self.vel.y < 0.0 && self.pos.y > platform.top() {
            self.pos.y = platform.bottom();
            self.vel.y = 0.0;
            Some(Contact::Ceiling)
        } else if self.vel.x > 0.0 && self.pos.x < platform.left() {
            self.pos.x = platform.left() - self.width();
            Some(Contact::LeftFace)
        } else if self.vel.x < 0.0 && self.pos.x > platform.left() {
            self.pos.x = platform.right();
            Some(Contact::RightFace)
        } else {
            None
        }
    }

    /// Resolve against every platform in order, returning how many pushed the body
    pub fn resolve_platforms<'a, I>(&mut self, platforms: I) -> usize
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        platforms
            .into_iter()
            .filter_map(|platform| self.resolve_platform(platform))
            .count()
    }

    /// Keep x inside [0, world_width - width]
    pub fn clamp_to_world(&mut self, world_width: f32) {
        let max_x = (world_width - self.width()).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    /// Full per-tick pipeline: step, ground, platforms, world clamp
    pub fn integrate<'a, I>(&mut self, gravity: f32, ground_y: f32, platforms: I, world_width: f32)
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        self.step(gravity);
        self.resolve_ground(ground_y);
        self.resolve_platforms(platforms);
        self.clamp_to_world(world_width);
    }
}
