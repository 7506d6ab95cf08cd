//! Growable GPU buffer for per-frame vertex uploads.
//!
//! The tessellated canvas changes size from frame to frame (arcs open and
//! close), so the buffer grows 2x whenever a frame outgrows it.

use std::marker::PhantomData;

/// Smallest allocation in bytes.
const MIN_CAPACITY: usize = 64;

/// New byte capacity for `needed` bytes, or `None` if `current` suffices.
///
/// Doubles the request, and always grows by at least 1KB.
fn grown_capacity(current: usize, needed: usize) -> Option<usize> {
    (needed > current).then(|| (needed * 2).max(current + 1024))
}

/// A typed GPU buffer that grows when written data exceeds its capacity.
///
/// Never shrinks (GPU buffers cannot be resized in place).
pub struct DynamicBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize, // bytes
    count: usize,    // items
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> DynamicBuffer<T> {
    /// Buffer with room for `capacity` items.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = (capacity * size_of::<T>()).max(MIN_CAPACITY);
        Self {
            buffer: allocate(device, label, capacity, usage),
            capacity,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Replace the contents with `data`, reallocating first if it does not
    /// fit.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        if let Some(new_capacity) = grown_capacity(self.capacity, bytes.len()) {
            log::debug!(
                "{}: growing {} -> {} bytes",
                self.label,
                self.capacity,
                new_capacity
            );
            self.buffer = allocate(device, &self.label, new_capacity, self.usage);
            self.capacity = new_capacity;
        }

        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = data.len();
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last [`write`](Self::write).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Bytes written by the last [`write`](Self::write).
    pub fn byte_len(&self) -> u64 {
        (self.count * size_of::<T>()) as u64
    }
}

fn allocate(
    device: &wgpu::Device,
    label: &str,
    size: usize,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size as u64,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_without_growing() {
        assert_eq!(grown_capacity(4096, 100), None);
        assert_eq!(grown_capacity(4096, 4096), None);
    }

    #[test]
    fn grows_to_double_the_request() {
        assert_eq!(grown_capacity(1024, 4000), Some(8000));
    }

    #[test]
    fn grows_by_at_least_one_kilobyte() {
        assert_eq!(grown_capacity(4096, 4100), Some(8200));
        assert_eq!(grown_capacity(64, 65), Some(1088));
    }
}
