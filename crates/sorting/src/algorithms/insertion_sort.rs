pub fn sort<T: Ord>(data: &mut [T]) {
    for index in 1..data.len() {
        let mut current = index;
        while current > 0 && data[current] < data[current - 1] {
            data.swap(current, current - 1);
            current -= 1;
        }
    }
}
