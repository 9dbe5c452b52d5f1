extern crate alloc;

use alloc::vec::Vec;

use core::fmt;

use crate::{EmptyQueue, Queue};

/// The chunk capacity used by the [`Default`] implementation of [`Elastic`].
pub const DEFAULT_CHUNK_CAPACITY: usize = 10_000;

/// A queue which stores its items in a ring of chunks and releases the storage of every chunk as soon as its last item has been dequeued.
///
/// The ring starts out with two empty chunks and grows by one chunk whenever the write cursor would otherwise run into the chunk that is still being drained. Chunks are never removed from the ring; a drained chunk is emptied in place and reused. Memory usage is hence proportional to the current queue length: once a burst of enqueued items has drained away, every chunk except the ones under the cursors has given up its storage.
///
/// Use the methods of the [Queue] trait implementation to interact with the contents of the queue.
pub struct Elastic<T> {
    /// The chunks, in ring order. The ring grows, chunks are never removed.
    chunks: Vec<Vec<T>>,
    /// Maximum number of items per chunk, or `None` for the [`double_buffered`](Elastic::double_buffered) configuration of two unbounded chunks.
    chunk_capacity: Option<usize>,
    /// Index of the chunk that receives enqueued items.
    write: usize,
    /// Index of the chunk that is being drained.
    read: usize,
    /// Position of the next item to dequeue within the chunk at `read`. Equal to that chunk's length when the chunk is exhausted; the next item then sits at offset zero of the following chunk.
    read_offset: usize,
    /// Amount of items in the queue.
    amount: usize,
}

impl<T> Elastic<T> {
    /// Creates an elastic queue whose chunks hold up to `chunk_capacity` items each.
    ///
    /// Small capacities keep idle memory low but grow the ring more often; large capacities trade allocated memory for fewer growth events.
    ///
    /// Panics if `chunk_capacity` is zero.
    pub fn new(chunk_capacity: usize) -> Self {
        assert!(chunk_capacity > 0, "chunk capacity must be positive");

        Self::with_chunk_capacity(Some(chunk_capacity))
    }

    /// Creates an elastic queue in the double-buffered configuration: the ring is pinned at two chunks of unbounded capacity, which are cleared and swapped in alternation.
    pub fn double_buffered() -> Self {
        Self::with_chunk_capacity(None)
    }

    fn with_chunk_capacity(chunk_capacity: Option<usize>) -> Self {
        Elastic {
            chunks: alloc::vec![Vec::new(), Vec::new()],
            chunk_capacity,
            write: 0,
            read: 1,
            read_offset: 0,
            amount: 0,
        }
    }

    /// Returns the chunk capacity with which this queue was initialised, or `None` for a [`double_buffered`](Elastic::double_buffered) queue.
    pub fn chunk_capacity(&self) -> Option<usize> {
        self.chunk_capacity
    }

    /// Returns the number of chunks currently in the ring. At least two, and never decreasing.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.chunks.len()
    }

    fn write_chunk_is_full(&self) -> bool {
        match self.chunk_capacity {
            Some(capacity) => self.chunks[self.write].len() >= capacity,
            None => false,
        }
    }

    /// Moves the write cursor off a full chunk. When the cursor would land on the chunk the reader is draining, the ring grows by one chunk first.
    fn advance_write_cursor(&mut self) {
        self.write = self.next_index(self.write);
        if self.write != self.read {
            return;
        }

        if self.read == 0 {
            // The write cursor wrapped around the end of the ring onto the reader. Grow the ring by a chunk appended at the end and write there.
            self.chunks.push(Vec::new());
            self.write = self.chunks.len() - 1;
        } else {
            // Splice a fresh chunk in at the write position. The reader's chunk, and every chunk after it, shifts one slot later.
            self.chunks.insert(self.write, Vec::new());
            self.read += 1;
        }
    }
}

impl<T> Default for Elastic<T> {
    /// Creates an elastic queue with a chunk capacity of [`DEFAULT_CHUNK_CAPACITY`].
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CAPACITY)
    }
}

impl<T: Clone> Queue for Elastic<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.amount
    }

    fn enqueue(&mut self, item: T) {
        if self.write_chunk_is_full() {
            self.advance_write_cursor();
        }

        self.chunks[self.write].push(item);
        self.amount += 1;
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        let item = self.peek()?.clone();
        self.amount -= 1;

        if self.read_offset == self.chunks[self.read].len() {
            // The read chunk is spent: release its storage and rotate off it.
            self.chunks[self.read] = Vec::new();
            self.read = self.next_index(self.read);
            if self.read == self.write {
                // Keep the writer off the chunk the reader starts draining next.
                self.write = self.next_index(self.write);
            }
            // Offset zero of the new read chunk was already returned by the peek above.
            self.read_offset = 1;
        } else {
            self.read_offset += 1;
        }

        Ok(item)
    }

    fn peek(&self) -> Result<&T, EmptyQueue> {
        if self.amount == 0 {
            return Err(EmptyQueue);
        }

        let chunk = &self.chunks[self.read];
        if self.read_offset == chunk.len() {
            // The read chunk is exhausted but the cursor has not rotated yet; the next item sits at the start of the following chunk.
            Ok(&self.chunks[self.next_index(self.read)][0])
        } else {
            Ok(&chunk[self.read_offset])
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Elastic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elastic")
            .field("chunk_capacity", &self.chunk_capacity)
            .field("len", &self.amount)
            .field("data", &DataDebugger(self))
            .finish()
    }
}

struct DataDebugger<'q, T>(&'q Elastic<T>);

impl<T: fmt::Debug> fmt::Debug for DataDebugger<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();

        let mut index = self.0.read;
        let mut offset = self.0.read_offset;
        let mut remaining = self.0.amount;
        while remaining > 0 {
            let chunk = &self.0.chunks[index];
            if offset == chunk.len() {
                index = self.0.next_index(index);
                offset = 0;
                continue;
            }

            list.entry(&chunk[offset]);
            offset += 1;
            remaining -= 1;
        }

        list.finish()
    }
}
