//! Obstacle identity pool.
//!
//! A fixed ring of `OBSTACLE_POOL_SIZE` slots addressed by a monotonically
//! advancing cursor. There is no free list: a slot comes back into use when the
//! cursor wraps onto it, so reuse is FIFO across the ring. Each hand-out
//! carries the number of times the cursor has wrapped as its generation, which
//! keeps recycled identities distinct from every earlier occupant of the slot.

use crate::types::{ObstacleId, OBSTACLE_POOL_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObstaclePool {
    cursor: u32,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Hand out the next identity in ring order.
    pub fn acquire(&mut self) -> ObstacleId {
        let size = OBSTACLE_POOL_SIZE as u32;
        let id = ObstacleId::new((self.cursor % size) as u8, self.cursor / size);
        self.cursor = self.cursor.wrapping_add(1);
        id
    }

    /// Total identities handed out so far.
    pub fn issued(&self) -> u32 {
        self.cursor
    }

    pub const fn capacity(&self) -> usize {
        OBSTACLE_POOL_SIZE
    }
}
