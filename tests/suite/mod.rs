mod config;
mod linked_list;
mod run;
