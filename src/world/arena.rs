use crate::objects::body::Body;

/// Stable reference to a body in a [`World`](super::World).
///
/// A handle stays valid until its body is removed; after that it resolves to
/// nothing, even if the slot is reused by a later body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    // Position in the dense arrays while occupied.
    dense: Option<usize>,
}

/// Bodies stored densely in insertion order, addressed through generational
/// slots. Removal keeps the order of the remaining bodies.
#[derive(Debug, Clone, Default)]
pub(crate) struct BodyArena {
    bodies: Vec<Body>,
    handles: Vec<BodyHandle>, // parallel to `bodies`
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl BodyArena {
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        let dense = self.bodies.len();
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot { generation: 0, dense: None });
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.dense = Some(dense);
        let handle = BodyHandle { index, generation: slot.generation };

        self.bodies.push(body);
        self.handles.push(handle);
        handle
    }

    fn dense_index(&self, handle: BodyHandle) -> Option<usize> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation == handle.generation {
            slot.dense
        } else {
            None
        }
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.dense_index(handle).map(|i| &self.bodies[i])
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.dense_index(handle).map(move |i| &mut self.bodies[i])
    }

    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let dense = self.dense_index(handle)?;
        self.release(handle);
        let body = self.bodies.remove(dense);
        self.handles.remove(dense);
        for (i, shifted) in self.handles.iter().enumerate().skip(dense) {
            self.slots[shifted.index as usize].dense = Some(i);
        }
        Some(body)
    }

    /// Keeps the bodies for which `keep` returns true, in order. Returns the
    /// number removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Body) -> bool,
    {
        let len = self.bodies.len();
        let mut write = 0;
        for read in 0..len {
            let handle = self.handles[read];
            if keep(&self.bodies[read]) {
                self.bodies.swap(write, read);
                self.handles.swap(write, read);
                self.slots[handle.index as usize].dense = Some(write);
                write += 1;
            } else {
                self.release(handle);
            }
        }
        self.bodies.truncate(write);
        self.handles.truncate(write);
        len - write
    }

    fn release(&mut self, handle: BodyHandle) {
        let slot = &mut self.slots[handle.index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.dense = None;
        self.free.push(handle.index);
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn ball_at(x: f64) -> Body {
        Body::circle(1.0, 1.0, Vec2::new(x, 0.0)).unwrap()
    }

    fn xs(arena: &BodyArena) -> Vec<f64> {
        arena.bodies().iter().map(|b| b.position.x).collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut arena = BodyArena::default();
        let a = arena.insert(ball_at(1.0));
        let b = arena.insert(ball_at(2.0));
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|body| body.position.x), Some(1.0));
        arena.get_mut(b).unwrap().position.x = 5.0;
        assert_eq!(xs(&arena), vec![1.0, 5.0]);
    }

    #[test]
    fn test_remove_keeps_order_and_other_handles() {
        let mut arena = BodyArena::default();
        let a = arena.insert(ball_at(1.0));
        let b = arena.insert(ball_at(2.0));
        let c = arena.insert(ball_at(3.0));

        let removed = arena.remove(a).unwrap();
        assert_eq!(removed.position.x, 1.0);
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());
        assert_eq!(arena.get(b).map(|body| body.position.x), Some(2.0));
        assert_eq!(arena.get(c).map(|body| body.position.x), Some(3.0));
        assert_eq!(xs(&arena), vec![2.0, 3.0]);
    }

    #[test]
    fn test_reused_slot_rejects_stale_handle() {
        let mut arena = BodyArena::default();
        let a = arena.insert(ball_at(1.0));
        arena.remove(a);
        let d = arena.insert(ball_at(4.0));
        assert_ne!(a, d);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(d).map(|body| body.position.x), Some(4.0));
    }

    #[test]
    fn test_retain() {
        let mut arena = BodyArena::default();
        let handles: Vec<_> = (0..6).map(|i| arena.insert(ball_at(i as f64))).collect();

        let removed = arena.retain(|body| body.position.x as i64 % 2 == 0);
        assert_eq!(removed, 3);
        assert_eq!(xs(&arena), vec![0.0, 2.0, 4.0]);
        assert!(arena.get(handles[1]).is_none());
        assert_eq!(arena.get(handles[4]).map(|body| body.position.x), Some(4.0));
        let iterated: Vec<_> = arena.iter().map(|(h, _)| h).collect();
        assert_eq!(iterated, vec![handles[0], handles[2], handles[4]]);
    }
}
