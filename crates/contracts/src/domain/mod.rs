pub mod a001_fabric;
pub mod a002_chemical_item;
pub mod a003_laundry_process;
pub mod a004_laundry_step;
pub mod a005_defect;
pub mod a006_wash_recipe;
pub mod a007_order;
