//! Camera/reflection/refraction rays and the bounded intersection list they
//! produce against the scene's shapes.

use super::linalg::{Mat4, Vec4};

pub const MAX_HITS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    pub fn new(origin: Vec4, direction: Vec4) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, t: f32) -> Vec4 {
        self.origin + self.direction * t
    }

    pub fn transform(&self, mat: &Mat4) -> Self {
        Self {
            origin: *mat * self.origin,
            direction: *mat * self.direction,
        }
    }
}

/// One shape hit at parameter `t`. `shape_index` indexes into the scene's
/// shape array, not a pointer — the core never holds references across the
/// shape/ray boundary so it can be ported to a kernel with no vtables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f32,
    pub shape_index: usize,
}

/// Fixed-capacity, ascending-`t`-ordered intersection list.
///
/// `add` inserts in sorted position by the same shift-and-swap the shader
/// uses rather than a sort-at-the-end, and silently drops the largest-`t`
/// entry once `MAX_HITS` is reached — this only ever matters for
/// pathologically over-intersected scenes, and a dropped far hit can't win
/// `get_hit` anyway.
#[derive(Clone, Copy, Debug)]
pub struct Intersections {
    hits: [Intersection; MAX_HITS],
    count: usize,
    pub is_hit: bool,
}

impl Default for Intersections {
    fn default() -> Self {
        Self::new()
    }
}

impl Intersections {
    pub fn new() -> Self {
        Self {
            hits: [Intersection { t: 0.0, shape_index: 0 }; MAX_HITS],
            count: 0,
            is_hit: false,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.is_hit = false;
    }

    pub fn as_slice(&self) -> &[Intersection] {
        &self.hits[..self.count]
    }

    pub fn add(&mut self, t: f32, shape_index: usize) {
        let mut hit = Intersection { t, shape_index };
        if hit.t >= 0.0 {
            self.is_hit = true;
        }

        for slot in &mut self.hits[..self.count] {
            if hit.t < slot.t {
                std::mem::swap(slot, &mut hit);
            }
        }

        if self.count < MAX_HITS {
            self.hits[self.count] = hit;
            self.count += 1;
        }
        // else: bubbling through every existing slot has left `hit` holding
        // the largest t among all candidates — dropped.
    }

    /// First entry with `t >= 0`: the smallest non-negative t, since the
    /// list is kept sorted ascending.
    pub fn get_hit(&self) -> Option<Intersection> {
        self.hits[..self.count].iter().find(|h| h.t >= 0.0).copied()
    }

    pub fn index_of(&self, hit: Intersection) -> Option<usize> {
        self.hits[..self.count].iter().position(|h| *h == hit)
    }

    pub fn remove(&mut self, index: usize) {
        for i in index..self.count - 1 {
            self.hits[i] = self.hits[i + 1];
        }
        self.count -= 1;
    }

    pub fn last(&self) -> Option<Intersection> {
        if self.count == 0 {
            None
        } else {
            Some(self.hits[self.count - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_and_querying_a_ray() {
        let origin = Vec4::point(1.0, 2.0, 3.0);
        let direction = Vec4::vector(4.0, 5.0, 6.0);
        let r = Ray::new(origin, direction);
        assert_eq!(r.origin, origin);
        assert_eq!(r.direction, direction);
    }

    #[test]
    fn computing_a_point_from_a_distance() {
        let r = Ray::new(Vec4::point(2.0, 3.0, 4.0), Vec4::vector(1.0, 0.0, 0.0));
        assert_eq!(r.position(0.0), Vec4::point(2.0, 3.0, 4.0));
        assert_eq!(r.position(1.0), Vec4::point(3.0, 3.0, 4.0));
        assert_eq!(r.position(-1.0), Vec4::point(1.0, 3.0, 4.0));
        assert_eq!(r.position(2.5), Vec4::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn intersections_are_kept_in_ascending_t_order() {
        let mut xs = Intersections::new();
        xs.add(5.0, 0);
        xs.add(1.0, 1);
        xs.add(3.0, 2);
        let ts: Vec<f32> = xs.as_slice().iter().map(|h| h.t).collect();
        assert_eq!(ts, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn the_hit_is_the_lowest_nonnegative_t() {
        let mut xs = Intersections::new();
        xs.add(-1.0, 0);
        xs.add(1.0, 1);
        assert_eq!(xs.get_hit(), Some(Intersection { t: 1.0, shape_index: 1 }));
    }

    #[test]
    fn the_hit_is_none_when_all_intersections_have_negative_t() {
        let mut xs = Intersections::new();
        xs.add(-2.0, 0);
        xs.add(-1.0, 1);
        assert!(!xs.is_hit);
        assert_eq!(xs.get_hit(), None);
    }

    #[test]
    fn overflow_past_max_hits_drops_the_largest_t() {
        let mut xs = Intersections::new();
        for i in 0..MAX_HITS {
            xs.add(i as f32, i);
        }
        // one more, smaller than everything already in: should bump out the
        // current largest (MAX_HITS - 1), not get dropped itself.
        xs.add(-5.0, 999);
        assert_eq!(xs.len(), MAX_HITS);
        assert_eq!(xs.as_slice()[0].t, -5.0);
        assert_eq!(xs.as_slice()[MAX_HITS - 1].t, (MAX_HITS - 2) as f32);
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut xs = Intersections::new();
        xs.add(1.0, 0);
        xs.add(2.0, 1);
        xs.add(3.0, 2);
        xs.remove(0);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs.as_slice()[0].t, 2.0);
        assert_eq!(xs.as_slice()[1].t, 3.0);
    }
}
