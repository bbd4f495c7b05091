mod test_serialization;
