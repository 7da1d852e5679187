pub mod sorting_process;
