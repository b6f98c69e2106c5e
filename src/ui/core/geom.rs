//! Cell coordinates. Every operation saturates, so a screen too small for the
//! content yields empty rects instead of underflow.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Half-open on the right and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        !self.is_empty()
            && (self.x..self.right()).contains(&p.x)
            && (self.y..self.bottom()).contains(&p.y)
    }

    /// Row `dy` of this rect as a 1-high rect (empty if out of range).
    pub fn row(&self, dy: u16) -> Rect {
        if dy >= self.h {
            return Rect::new(self.x, self.y, self.w, 0);
        }
        Rect::new(self.x, self.y.saturating_add(dy), self.w, 1)
    }

    /// Shrinks by `dx` columns on both sides and `dy` rows top and bottom.
    pub fn shrink(self, dx: u16, dy: u16) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w.saturating_sub(dx.saturating_mul(2)),
            self.h.saturating_sub(dy.saturating_mul(2)),
        )
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// A `w`×`h` rect in the middle, clamped to `self`. Odd slack goes to the
    /// right and bottom.
    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Rect::new(
            self.x + (self.w - w) / 2,
            self.y + (self.h - h) / 2,
            w,
            h,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
