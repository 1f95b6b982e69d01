//! Fixed-capacity ring buffer of pending secondary rays.
//!
//! Stands in for recursion in `colour_at`: the GPU fragment path has no call
//! stack, so reflection/refraction bounces are pushed here and drained by an
//! outer loop bounded by `MAX_REFLECT_REFRACT` instead.

use super::ray::Ray;

pub const MAX_RAY_QUEUE: usize = 5;

#[derive(Clone, Copy, Debug)]
pub struct RayInfo {
    pub ray: Ray,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RayQueue {
    rays: [RayInfo; MAX_RAY_QUEUE],
    start: usize,
    count: usize,
}

impl Default for RayQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RayQueue {
    pub fn new() -> Self {
        Self {
            rays: [RayInfo {
                ray: Ray::new(
                    super::linalg::Vec4::point(0.0, 0.0, 0.0),
                    super::linalg::Vec4::vector(0.0, 0.0, 0.0),
                ),
                weight: 0.0,
            }; MAX_RAY_QUEUE],
            start: 0,
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drops the push when the ring is full. The source's guard is
    /// `count > MAX_RAY_QUEUE`, one past the array's real capacity — an
    /// off-by-one that in practice lets one extra ray through past the
    /// nominal limit before drops start. Preserved verbatim; see the design
    /// notes on why this isn't "fixed" to `>=`.
    pub fn push(&mut self, ray: Ray, weight: f32) {
        if self.count > MAX_RAY_QUEUE {
            return;
        }
        let write_at = (self.start + self.count) % MAX_RAY_QUEUE;
        self.rays[write_at] = RayInfo { ray, weight };
        self.count += 1;
    }

    pub fn pop(&mut self) -> Option<RayInfo> {
        if self.count == 0 {
            return None;
        }
        let info = self.rays[self.start];
        self.start = (self.start + 1) % MAX_RAY_QUEUE;
        self.count -= 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::linalg::Vec4;

    fn dummy_ray() -> Ray {
        Ray::new(Vec4::point(0.0, 0.0, 0.0), Vec4::vector(0.0, 0.0, 1.0))
    }

    #[test]
    fn fifo_order() {
        let mut q = RayQueue::new();
        q.push(dummy_ray(), 1.0);
        q.push(dummy_ray(), 0.5);
        assert_eq!(q.pop().unwrap().weight, 1.0);
        assert_eq!(q.pop().unwrap().weight, 0.5);
        assert!(q.pop().is_none());
    }

    #[test]
    fn pushes_past_capacity_are_dropped() {
        let mut q = RayQueue::new();
        for i in 0..MAX_RAY_QUEUE + 3 {
            q.push(dummy_ray(), i as f32);
        }
        let mut drained = 0;
        while q.pop().is_some() {
            drained += 1;
        }
        // MAX_RAY_QUEUE nominal slots plus the off-by-one extra push the
        // source's guard admits.
        assert_eq!(drained, MAX_RAY_QUEUE + 1);
    }
}
