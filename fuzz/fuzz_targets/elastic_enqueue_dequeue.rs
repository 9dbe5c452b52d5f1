#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;

use elastic_queues::Elastic;
use elastic_queues::Queue;

#[derive(Debug, Arbitrary)]
enum Operation<T> {
    Enqueue(T),
    Dequeue,
    Peek,
}

fuzz_target!(|data: (Vec<Operation<u8>>, usize)| {
    let operations = data.0;
    let chunk_capacity = data.1;

    // Restrict the chunk capacity to between 1 and 2048 items (inclusive).
    if !(1..=2048).contains(&chunk_capacity) {
        return;
    }

    let mut control = VecDeque::new();
    let mut test = Elastic::new(chunk_capacity);

    for operation in operations {
        match operation {
            Operation::Enqueue(item) => {
                control.push_back(item);
                test.enqueue(item);
            }
            Operation::Dequeue => {
                let control_result = control.pop_front();
                let test_result = test.dequeue();
                assert_eq!(test_result.ok(), control_result);
            }
            Operation::Peek => {
                let control_result = control.front();
                let test_result = test.peek();
                assert_eq!(test_result.ok(), control_result);
            }
        }

        assert_eq!(test.len(), control.len());
    }
});
