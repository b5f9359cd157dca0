pub mod u501_predict;
