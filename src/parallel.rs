cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// Maps every `(index, item)` pair of `items`, spreading the work over
        /// the rayon thread pool. Output order matches input order.
        pub fn map_indexed<T, R, F>(items: &[T], f: F) -> Vec<R>
            where T: Sync, R: Send, F: Fn(usize, &T) -> R + Sync + Send
        {
            items.par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        }

    } else {
        pub fn map_indexed<T, R, F>(items: &[T], f: F) -> Vec<R>
            where F: Fn(usize, &T) -> R
        {
            items.iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect()
        }
    }
}
