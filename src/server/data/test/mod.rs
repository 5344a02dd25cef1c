mod movie;
