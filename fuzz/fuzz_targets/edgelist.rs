#![no_main]

use libfuzzer_sys::fuzz_target;
use followcover::loader::load_graph_from_mem;

fuzz_target!(|data: &[u8]| {
    if let Ok(graph) = load_graph_from_mem(data) {
        let cover = graph.find_minimum_cover();
        assert!(graph.is_covered_by(&cover));
        assert_eq!(graph.export().len(), graph.vertex_count());
    }
});
