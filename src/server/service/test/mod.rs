mod album;
