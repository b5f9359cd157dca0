pub mod a001_feature_set;
