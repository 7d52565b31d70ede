//! Built-in algorithm table

use super::AlgorithmMeta;
use crate::algorithms::{
    BinarySearch, BubbleSort, FrameSequence, InsertionSort, LinearSearch, QuickSort,
    SelectionSort,
};
use crate::params::{ParamError, ParamKind, ParamSpec, Params};
use crate::visual::visualize_array;

const SEARCHING: &str = "Searching";
const SORTING: &str = "Sorting";

const SPEED: ParamSpec = ParamSpec {
    label: "Speed (ms)",
    id: "speed",
    kind: ParamKind::Range {
        min: 100,
        max: 2000,
        step: 100,
    },
    default: "500",
};

const TARGET_NEGATIVE: ParamSpec = ParamSpec {
    label: "Target",
    id: "target",
    kind: ParamKind::Number,
    default: "-2",
};

const SORT_INPUT: ParamSpec = ParamSpec {
    label: "Array (comma separated)",
    id: "array",
    kind: ParamKind::NumberList,
    default: "4,-2,-8,0,5,2,1,1,0",
};

const LINEAR_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        label: "Array (comma separated)",
        id: "array",
        kind: ParamKind::NumberList,
        default: "2,6,-2,4,3,2",
    },
    TARGET_NEGATIVE,
    SPEED,
];

const BINARY_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        label: "Sorted Array (comma separated)",
        id: "array",
        kind: ParamKind::NumberList,
        default: "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16",
    },
    ParamSpec {
        label: "Target",
        id: "target",
        kind: ParamKind::Number,
        default: "5",
    },
    SPEED,
];

const SORT_PARAMS: &[ParamSpec] = &[SORT_INPUT, SPEED];

fn run_linear(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(LinearSearch::new(
        params.list("array")?.to_vec(),
        params.number("target")?,
        params.speed("speed"),
    )))
}

fn run_binary(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(BinarySearch::new(
        params.list("array")?.to_vec(),
        params.number("target")?,
        params.speed("speed"),
    )))
}

fn run_bubble(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(BubbleSort::new(
        params.list("array")?.to_vec(),
        params.speed("speed"),
    )))
}

fn run_selection(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(SelectionSort::new(
        params.list("array")?.to_vec(),
        params.speed("speed"),
    )))
}

fn run_insertion(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(InsertionSort::new(
        params.list("array")?.to_vec(),
        params.speed("speed"),
    )))
}

fn run_quick(params: &Params) -> Result<Box<dyn FrameSequence>, ParamError> {
    Ok(Box::new(QuickSort::new(
        params.list("array")?.to_vec(),
        params.speed("speed"),
    )))
}

pub(crate) const ALGORITHMS: &[AlgorithmMeta] = &[
    AlgorithmMeta {
        id: "linear-search",
        name: "Linear Search",
        description: "Linear search scans each element in the array sequentially to find \
            the target value. Returns the index if found, otherwise -1.",
        topic: SEARCHING,
        params: LINEAR_PARAMS,
        run: run_linear,
        visualize: visualize_array,
    },
    AlgorithmMeta {
        id: "binary-search",
        name: "Binary Search",
        description: "Binary search finds the position of a target value within a sorted \
            array. It compares the target to the middle element and narrows down the \
            search range accordingly.",
        topic: SEARCHING,
        params: BINARY_PARAMS,
        run: run_binary,
        visualize: visualize_array,
    },
    AlgorithmMeta {
        id: "bubble-sort",
        name: "Bubble Sort",
        description: "Bubble Sort repeatedly swaps adjacent elements that are in the wrong \
            order. It stops early once a full pass makes no swaps. Its average and \
            worst-case time complexity make it unsuitable for large data sets.",
        topic: SORTING,
        params: SORT_PARAMS,
        run: run_bubble,
        visualize: visualize_array,
    },
    AlgorithmMeta {
        id: "selection-sort",
        name: "Selection Sort",
        description: "Selection sort is an in-place comparison sort. Each pass finds the \
            minimum of the unsorted portion and swaps it to the front. It has O(n^2) time \
            complexity but needs no auxiliary memory.",
        topic: SORTING,
        params: SORT_PARAMS,
        run: run_selection,
        visualize: visualize_array,
    },
    AlgorithmMeta {
        id: "insertion-sort",
        name: "Insertion Sort",
        description: "Insertion sort builds the sorted array one element at a time, moving \
            each new element left past every larger neighbor. It is efficient on small or \
            nearly sorted inputs.",
        topic: SORTING,
        params: SORT_PARAMS,
        run: run_insertion,
        visualize: visualize_array,
    },
    AlgorithmMeta {
        id: "quick-sort",
        name: "Quick Sort",
        description: "Quick sort picks the last element as pivot, partitions the array so \
            smaller elements come before it and the rest after it, then sorts both sides \
            recursively. Average time complexity is O(n log n).",
        topic: SORTING,
        params: SORT_PARAMS,
        run: run_quick,
        visualize: visualize_array,
    },
];
